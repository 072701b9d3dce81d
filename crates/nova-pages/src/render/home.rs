//! Home page: hero section with the call to action.

use maud::{Markup, html};

use super::Page;
use super::components::gradient_backdrop;

/// Render the home page body.
pub fn render(product_price: &str) -> Markup {
    html! {
        (gradient_backdrop())
        section class="hero" {
            div class="container" {
                div class="hero-content" {
                    div class="hero-text" {
                        h1 { "Sound Beyond Limits" }
                        p {
                            "Experience premium audio quality with our flagship wireless headphones. "
                            "Engineered for perfection, designed for you."
                        }
                        div class="cta-buttons" {
                            a href=(Page::Contacts.path()) class="btn btn-primary" {
                                "Order Now - " (product_price)
                            }
                            a href=(Page::Features.path()) class="btn btn-secondary" { "Learn More" }
                        }
                    }
                    div class="hero-product" {
                        div class="product-card" {
                            div class="product-image-wrapper" {
                                div class="glow" {}
                                div class="headphones" {}
                            }
                        }
                    }
                }
            }
        }
    }
}
