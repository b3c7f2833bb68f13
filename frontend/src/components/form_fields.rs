use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label>
                {&props.label}
                {if props.required { html! { <span class="required">{" *"}</span> } } else { html! {} }}
            </label>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                {oninput}
            />
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: String,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    /// First, empty option; omitted when `None`
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class={classes!("form-group", props.error.is_some().then_some("has-error"))}>
            <label>
                {&props.label}
                {if props.required { html! { <span class="required">{" *"}</span> } } else { html! {} }}
            </label>
            <select {onchange}>
                {if let Some(placeholder) = &props.placeholder {
                    html! { <option value="" selected={props.value.is_empty()}>{placeholder}</option> }
                } else { html! {} }}
                {for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label}</option>
                })}
            </select>
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    html! {
        <div class="form-group">
            <label>{&props.label}</label>
            <textarea rows={props.rows.to_string()} value={props.value.clone()} {oninput} />
            <FieldError error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxFieldProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(CheckboxField)]
pub fn checkbox_field(props: &CheckboxFieldProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    html! {
        <div class="form-group checkbox">
            <label>
                <input type="checkbox" checked={props.checked} {onchange} />
                {&props.label}
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchInputProps {
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::from("Buscar..."))]
    pub placeholder: AttrValue,
}

/// Free-text search box above a list
#[function_component(SearchInput)]
pub fn search_input(props: &SearchInputProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <input class="search-input" type="search" placeholder={props.placeholder.clone()} {oninput} />
    }
}

#[derive(Properties, PartialEq)]
struct FieldErrorProps {
    error: Option<String>,
}

#[function_component(FieldError)]
fn field_error(props: &FieldErrorProps) -> Html {
    match &props.error {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    }
}

/// Select options for an "all" filter followed by the known values
pub fn filter_options<'a>(all_label: &str, values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<(String, String)> {
    let mut options = vec![(crate::domain::filters::ALL_VALUE.to_string(), all_label.to_string())];
    options.extend(values.into_iter().map(|(value, label)| (value.to_string(), label.to_string())));
    options
}
