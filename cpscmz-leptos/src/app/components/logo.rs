use cpscmz_state::content::SERVER;
use leptos::{html, prelude::*};
use tracing::warn;

/// A finished load with no pixels is a failed one. Covers errors that fired
/// before hydration attached `on:error`.
pub fn load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// Server logo. Falls back to a monogram block if the image fails to load.
#[component]
pub fn Logo(
    #[prop(into)] class: String,
    #[prop(default = "Logo")] alt: &'static str,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    let img_ref = NodeRef::<html::Img>::new();
    let img_class = format!("{} object-cover", class);
    let placeholder_class = format!(
        "{} grid place-items-center bg-gradient-to-br from-indigo-500 to-purple-600 font-jakarta font-extrabold text-white select-none",
        class
    );

    let fall_back = move |reason: &str| {
        if !failed.get_untracked() {
            warn!("logo {} from {}", reason, SERVER.logo_url);
            failed.set(true);
        }
    };

    Effect::new(move || {
        let Some(img) = img_ref.get() else {
            return;
        };
        if load_failed(img.complete(), img.natural_width()) {
            fall_back("failed to load before hydration");
        }
    });

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || {
                view! {
                    <div class=placeholder_class.clone() role="img" aria-label=alt data-logo="placeholder">
                        {SERVER.monogram}
                    </div>
                }
            }
        >
            <img
                node_ref=img_ref
                src=SERVER.logo_url
                alt=alt
                class=img_class.clone()
                on:error=move |_| fall_back("failed to load")
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_image_is_detected() {
        assert!(load_failed(true, 0));
    }

    #[test]
    fn loading_or_loaded_image_is_kept() {
        assert!(!load_failed(false, 0));
        assert!(!load_failed(true, 128));
    }
}
