use web_sys::HtmlInputElement;
use yew::prelude::*;

const INPUT_CLASS: &str = "w-full rounded-lg border border-gray-300 bg-white \
                           px-3 py-2 text-gray-900 shadow-sm outline-none \
                           focus:border-gray-500 focus:ring-2 \
                           focus:ring-gray-200 disabled:opacity-50";

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Used as both `name` and `id`, so labels can point at it
    pub name: AttrValue,
    pub value: AttrValue,
    /// Emits the raw input value on every keystroke
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// A controlled text-like input. Holds no state of its own.
#[function_component]
pub fn Input(props: &Props) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            id={props.name.clone()}
            name={props.name.clone()}
            type={props.input_type.clone()}
            value={props.value.clone()}
            placeholder={props.placeholder.clone()}
            step={props.step.clone()}
            min={props.min.clone()}
            disabled={props.disabled}
            class={INPUT_CLASS}
            {oninput}
        />
    }
}
