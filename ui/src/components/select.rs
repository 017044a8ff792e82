use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct SelectItem {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub items: Vec<SelectItem>,
    /// Value of the selected item
    pub value: AttrValue,
    /// Emits the newly selected item's value
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
}

#[function_component]
pub fn Select(props: &Props) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <select
            aria-label={props.aria_label.clone()}
            class="rounded-lg border border-gray-300 bg-white px-3 py-2 \
                   text-sm shadow-sm outline-none focus:border-gray-500 \
                   focus:ring-2 focus:ring-gray-200"
            {onchange}
        >
            { for props.items.iter().map(|item| html! {
                <option
                    key={item.value.to_string()}
                    value={item.value.clone()}
                    selected={item.value == props.value}
                >
                    {item.label.clone()}
                </option>
            }) }
        </select>
    }
}
