//! Shared HTML components used across all site pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{Markup, PreEscaped, html};

use super::Page;

/// Inline CSS for all site pages.
///
/// Dark theme with a purple gradient accent. Layout collapses to a single
/// column below 968px.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#0a0a0a;--fg:#fff;--fg2:rgba(255,255,255,.7);--fg3:rgba(255,255,255,.6);--line:rgba(255,255,255,.1);--glass:rgba(255,255,255,.03);--accent:linear-gradient(135deg,#667eea 0%,#f093fb 100%);--accent-deep:linear-gradient(135deg,#667eea 0%,#764ba2 100%)}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:var(--bg);color:var(--fg);overflow-x:hidden}
.gradient-bg{position:fixed;inset:0;background:linear-gradient(135deg,#667eea 0%,#764ba2 50%,#f093fb 100%);opacity:.15;filter:blur(80px);z-index:0}

nav{position:fixed;top:0;width:100%;padding:1.5rem 4rem;display:flex;justify-content:space-between;align-items:center;z-index:1000;backdrop-filter:blur(10px);background:rgba(10,10,10,.8);border-bottom:1px solid var(--line)}
.logo{font-size:1.5rem;font-weight:700;letter-spacing:-.5px;background:var(--accent);-webkit-background-clip:text;-webkit-text-fill-color:transparent}
.nav-links{display:flex;gap:3rem;list-style:none}
.nav-links a{color:var(--fg3);text-decoration:none;font-size:.95rem;transition:all .3s;position:relative;padding:.5rem 0}
.nav-links a:hover,.nav-links a.active{color:var(--fg)}
.nav-links a.active::after{content:"";position:absolute;bottom:0;left:0;width:100%;height:2px;background:var(--accent)}

.container{max-width:1400px;margin:0 auto;padding:6rem 2rem 2rem;position:relative;z-index:10;min-height:100vh}
.page-title{font-size:3.5rem;font-weight:800;margin-bottom:1rem;background:linear-gradient(135deg,#fff 0%,rgba(255,255,255,.6) 100%);-webkit-background-clip:text;-webkit-text-fill-color:transparent}
.page-subtitle{font-size:1.25rem;color:var(--fg3);margin-bottom:3rem}

.hero{min-height:100vh;display:flex;align-items:center;padding-top:5rem}
.hero-content{display:grid;grid-template-columns:1fr 1fr;gap:4rem;align-items:center}
.hero-text h1{font-size:5rem;font-weight:800;line-height:1.1;margin-bottom:1.5rem;background:linear-gradient(135deg,#fff 0%,rgba(255,255,255,.6) 100%);-webkit-background-clip:text;-webkit-text-fill-color:transparent}
.hero-text p{font-size:1.25rem;line-height:1.8;color:var(--fg2);margin-bottom:2rem}
.cta-buttons{display:flex;gap:1rem}
.btn{padding:1rem 2.5rem;border:none;border-radius:50px;font-size:1rem;font-weight:600;cursor:pointer;transition:all .3s ease;text-decoration:none;display:inline-block}
.btn-primary{background:var(--accent-deep);color:#fff;box-shadow:0 10px 40px rgba(102,126,234,.4)}
.btn-primary:hover{transform:translateY(-2px);box-shadow:0 15px 50px rgba(102,126,234,.6)}
.btn-secondary{background:rgba(255,255,255,.1);color:#fff;backdrop-filter:blur(10px);border:1px solid rgba(255,255,255,.2)}
.btn-secondary:hover{background:rgba(255,255,255,.15);transform:translateY(-2px)}
.product-card{background:var(--glass);backdrop-filter:blur(20px);border:1px solid var(--line);border-radius:2rem;padding:3rem;box-shadow:0 30px 80px rgba(0,0,0,.4)}
.product-image-wrapper{position:relative;width:100%;height:400px;display:flex;align-items:center;justify-content:center;margin-bottom:2rem}
.glow{position:absolute;width:300px;height:300px;background:radial-gradient(circle,rgba(102,126,234,.4) 0%,transparent 70%);border-radius:50%;filter:blur(60px)}
.headphones{width:280px;height:280px;background:var(--accent-deep);border-radius:50%;position:relative;z-index:2;display:flex;align-items:center;justify-content:center;box-shadow:0 20px 60px rgba(102,126,234,.4)}
.headphones::before{content:"";position:absolute;width:240px;height:240px;background:var(--bg);border-radius:50%}
.headphones::after{content:"🎧";font-size:6rem;position:absolute;z-index:3}

.features-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(350px,1fr));gap:2rem;margin-top:3rem}
.feature-card{background:var(--glass);backdrop-filter:blur(20px);border:1px solid var(--line);border-radius:1.5rem;padding:2.5rem;transition:all .3s ease}
.feature-card:hover{transform:translateY(-10px);background:rgba(255,255,255,.05);border-color:rgba(102,126,234,.3)}
.feature-icon{font-size:3rem;margin-bottom:1.5rem;display:block}
.feature-card h3{font-size:1.5rem;margin-bottom:1rem}
.feature-card p{line-height:1.6;color:var(--fg3)}

.specs-container{display:grid;grid-template-columns:repeat(auto-fit,minmax(400px,1fr));gap:2rem;margin-top:3rem}
.spec-category{background:var(--glass);backdrop-filter:blur(20px);border:1px solid var(--line);border-radius:1.5rem;padding:2.5rem}
.spec-category h3{font-size:1.75rem;margin-bottom:1.5rem;background:var(--accent);-webkit-background-clip:text;-webkit-text-fill-color:transparent}
.spec-item{padding:1rem 0;border-bottom:1px solid var(--line);color:rgba(255,255,255,.8)}
.spec-item:last-child{border-bottom:none}

.contact-container{max-width:800px;margin:3rem auto}
.contact-form{background:var(--glass);backdrop-filter:blur(20px);border:1px solid var(--line);border-radius:1.5rem;padding:3rem}
.form-group{margin-bottom:1.5rem}
.form-group label{display:block;margin-bottom:.5rem;color:rgba(255,255,255,.8);font-weight:500}
.form-group input,.form-group textarea{width:100%;padding:1rem;background:rgba(255,255,255,.05);border:1px solid rgba(255,255,255,.2);border-radius:.5rem;color:#fff;font-size:1rem;font-family:inherit;transition:all .3s}
.form-group input:focus,.form-group textarea:focus{outline:none;border-color:#667eea;background:rgba(255,255,255,.08)}
.form-group textarea{min-height:150px;resize:vertical}
.form-message{margin-top:1rem;padding:1rem;border-radius:.5rem;display:none}
.form-message.success{background:rgba(34,197,94,.2);border:1px solid rgba(34,197,94,.4);color:rgb(134,239,172)}
.form-message.error{background:rgba(239,68,68,.2);border:1px solid rgba(239,68,68,.4);color:rgb(252,165,165)}

@media(max-width:968px){
nav{padding:1.5rem 2rem}
.nav-links{gap:1.5rem}
.hero-content{grid-template-columns:1fr}
.hero-text h1{font-size:3rem}
.page-title{font-size:2.5rem}
.features-grid,.specs-container{grid-template-columns:1fr}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#0a0a0a;color:#fff;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:rgba(255,255,255,.6);margin-bottom:1rem;line-height:1.5}
.error-page a{color:#667eea}
"#;

/// Render the full HTML page shell with `<head>`, navigation and body content.
pub fn page_shell(current: Page, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site_name) " - " (current.title()) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (nav_bar(current, site_name))
                (body_content)
            }
        }
    }
}

/// Top navigation with the current page marked `active`.
pub fn nav_bar(current: Page, site_name: &str) -> Markup {
    html! {
        nav {
            div class="logo" { (site_name) }
            ul class="nav-links" {
                @for page in Page::ALL {
                    li {
                        a href=(page.path()) class=[(page == current).then_some("active")] {
                            (page.nav_label())
                        }
                    }
                }
            }
        }
    }
}

/// Decorative background layer shared by every page.
pub fn gradient_backdrop() -> Markup {
    html! { div class="gradient-bg" {} }
}
