use cpscmz_state::content::SERVER;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::html::attribute::custom::CustomAttribute;
use leptos::tachys::view::RenderHtml;

use app::App;

pub mod app;
pub mod logger;
pub mod toolbox;

/// `<meta property=..>` for Open Graph; `property` is not a known `<meta>` attribute.
fn og_meta(property: &'static str, content: &'static str) -> impl IntoView {
    leptos::html::meta()
        .attr("property", property)
        .attr("content", content)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);
    let title = format!("{} | Discord Community", SERVER.short_name);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=SERVER.tagline />
                <meta name="keywords" content="discord,school,students,study,community" />
                {og_meta("og:title", SERVER.name)}
                {og_meta("og:description", SERVER.tagline)}
                {og_meta("og:image", SERVER.logo_url)}
                <meta name="twitter:card" content="summary" />
                <meta name="color-scheme" content="dark" />
                <title>{title}</title>
                <link rel="icon" href=SERVER.logo_url />
                <link rel="stylesheet" id="leptos" href=stylesheet />
                <HydrationScripts options />
            </head>
            <body class="bg-[#0f111a] text-white antialiased">
                <App />
            </body>
        </html>
    }
}

/// Renders the whole page, `<!DOCTYPE html>` included, for the static site.
pub fn render_document(options: LeptosOptions) -> String {
    let owner = Owner::new();
    let html = owner.with(|| shell(options).to_html());
    format!("<!DOCTYPE html>\n{}", html)
}

/// Renders only the app body, without the document shell.
pub fn render_page() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <App /> }.to_html())
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    logger::simple_logger_init();
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use cpscmz_state::{
        content::{FEATURES, RULES, STEPS},
        section::Section,
    };
    use strum::IntoEnumIterator;

    use super::*;

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    #[test]
    fn renders_one_card_per_entry() {
        let html = render_page();

        assert_eq!(count(&html, r#"data-card="highlight""#), 4);
        assert_eq!(count(&html, r#"data-card="step""#), 4);
        assert_eq!(count(&html, r#"data-card="feature""#), 6);
        assert_eq!(count(&html, r#"data-card="rule""#), 4);
    }

    #[test]
    fn cards_keep_content_order() {
        let html = render_page();

        let positions: Vec<usize> = FEATURES
            .iter()
            .map(|f| html.find(f.description).expect("feature rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let positions: Vec<usize> = RULES
            .iter()
            .map(|r| html.find(r.title).expect("rule rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn nav_anchors_resolve() {
        let html = render_page();

        for section in Section::NAV {
            assert!(
                html.contains(&format!(r#"href="{}""#, section.href())),
                "missing link to {}",
                section.id()
            );
        }
        assert!(html.contains(r##"href="#rules""##));
        assert!(html.contains(r#"aria-label="Home""#));
        for section in Section::iter() {
            assert_eq!(
                count(&html, &format!(r#"id="{}""#, section.id())),
                1,
                "section {} should appear once",
                section.id()
            );
        }
    }

    #[test]
    fn invite_links_open_in_new_context() {
        let html = render_page();

        let invite = format!(r#"href="{}""#, SERVER.invite_url);
        let links = count(&html, &invite);
        // navbar, hero, rules panel, footer
        assert_eq!(links, 4);
        assert_eq!(count(&html, r#"target="_blank""#), links);
        assert_eq!(count(&html, r#"rel="noopener noreferrer""#), links);
    }

    #[test]
    fn initial_render_is_unscrolled_and_unrevealed() {
        let html = render_page();

        assert!(html.contains(r#"data-scrolled="false""#));
        assert!(html.contains("bg-transparent py-6"));
        assert!(!html.contains(r#"data-reveal="revealed""#));
        assert!(count(&html, r#"data-reveal="pending""#) > STEPS.len() + FEATURES.len() + RULES.len());
    }

    #[test]
    fn logo_points_at_remote_image() {
        let html = render_page();

        assert!(html.contains(&format!(r#"src="{}""#, SERVER.logo_url)));
        assert!(!html.contains(r#"data-logo="placeholder""#));
    }

    #[test]
    fn document_has_shell() {
        let options = LeptosOptions::builder().output_name("cpscmz").build();
        let html = render_document(options);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(r#"href="/pkg/cpscmz.css""#));
        assert!(html.contains("<title>"));
        assert!(html.contains(r#"id="features""#));
    }

    #[test]
    fn document_has_open_graph_tags() {
        let options = LeptosOptions::builder().output_name("cpscmz").build();
        let html = render_document(options);

        assert!(html.contains(&format!(
            r#"<meta property="og:title" content="{}""#,
            SERVER.name
        )));
        assert!(html.contains(&format!(
            r#"<meta property="og:image" content="{}""#,
            SERVER.logo_url
        )));
        assert_eq!(count(&html, r#"property="og:"#), 3);
    }
}
