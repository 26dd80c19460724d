use dioxus::prelude::*;

/// Labelled input with an optional inline error beneath it.
#[component]
pub fn FormField(
    #[props(into)] label: String,
    #[props(into)] name: String,
    #[props(into, default = "text".to_string())] input_type: String,
    value: String,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",

            label {
                r#for: "{name}",
                "{label}"
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(error) = error {
                div {
                    class: "field-error",
                    "{error}"
                }
            }
        }
    }
}
