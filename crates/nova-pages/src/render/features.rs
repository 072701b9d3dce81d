//! Features page.

use maud::{Markup, html};
use nova_core::Feature;

use super::components::gradient_backdrop;

pub fn render(site_name: &str, features: &[Feature]) -> Markup {
    html! {
        (gradient_backdrop())
        div class="container" {
            h1 class="page-title" { "Premium Features" }
            p class="page-subtitle" {
                "Discover what makes " (site_name) " headphones extraordinary"
            }
            div class="features-grid" id="featuresGrid" {
                @for feature in features {
                    div class="feature-card" {
                        span class="feature-icon" { (feature.icon) }
                        h3 { (feature.title) }
                        p { (feature.description) }
                    }
                }
            }
        }
    }
}
