//! Technical specifications page.

use maud::{Markup, html};
use nova_core::Spec;

use super::components::gradient_backdrop;

pub fn render(specs: &[Spec]) -> Markup {
    html! {
        (gradient_backdrop())
        div class="container" {
            h1 class="page-title" { "Technical Specifications" }
            p class="page-subtitle" { "Every detail engineered to perfection" }
            div class="specs-container" id="specsContainer" {
                @for spec in specs {
                    div class="spec-category" {
                        h3 { (spec.category) }
                        @for item in &spec.items {
                            div class="spec-item" { (item) }
                        }
                    }
                }
            }
        }
    }
}
