use dioxus::prelude::*;

/// Form field label. `class: "label--required"` adds the required marker.
#[component]
pub fn Label(
    #[props(default = "".to_string())] html_for: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label {class}",
            r#for: "{html_for}",
            {children}
        }
    }
}
