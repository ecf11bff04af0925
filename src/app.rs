use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::backend::TagList;
use crate::structs::Operator;

const CONTAINER_STYLE: &str = "display: flex; flex-direction: column; gap: 10px; padding: 10px; font-family: sans-serif;";
const TAG_CONTAINER_STYLE: &str = "display: flex; flex-wrap: wrap; gap: 6px;";
const TAG_STYLE: &str = "display: flex; align-items: center; gap: 2px;";
const BUTTON_STYLE: &str = "padding: 5px 10px; margin: 0 2px; border: 1px solid #dddddd; background-color: #f0f0f0;";

#[derive(Properties, PartialEq)]
pub struct FormulaInputProps {
    /// Receives the `Formula: ...` message; a browser alert shows it when unset
    #[prop_or_default]
    pub on_calculate: Option<Callback<String>>,
}

#[derive(Properties, PartialEq)]
pub struct TagFieldProps {
    pub index: usize,
    pub value: String,
    /// Renders the delete button; false when this is the only tag
    pub can_delete: bool,
    pub on_change: Callback<(usize, String)>,
    pub on_delete: Callback<usize>,
}

#[derive(Properties, PartialEq)]
pub struct OperationButtonsProps {
    pub on_operation: Callback<Operator>,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <FormulaInput />
    }
}

#[function_component(FormulaInput)]
pub fn formula_input(props: &FormulaInputProps) -> Html {
    let tags = use_state(TagList::new);

    let on_change = {
        let tags = tags.clone();
        Callback::from(move |(index, value): (usize, String)| {
            match tags.with_tag(index, value) {
                Ok(next) => {
                    log::debug!("edited tag {}", index);
                    tags.set(next);
                }
                Err(e) => log::warn!("edit rejected: {}", e),
            }
        })
    };

    let on_delete = {
        let tags = tags.clone();
        Callback::from(move |index: usize| match tags.without_tag(index) {
            Ok(next) => {
                log::debug!("deleted tag {}", index);
                tags.set(next);
            }
            Err(e) => log::warn!("delete rejected: {}", e),
        })
    };

    let on_operation = {
        let tags = tags.clone();
        Callback::from(move |op: Operator| {
            log::debug!("appended operator {}", op);
            tags.set(tags.with_operator(op));
        })
    };

    let add_onclick = {
        let tags = tags.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("appended blank tag");
            tags.set(tags.with_blank_tag());
        })
    };

    let calculate_onclick = {
        let tags = tags.clone();
        let on_calculate = props.on_calculate.clone();
        Callback::from(move |_: MouseEvent| {
            let message = tags.display_message();
            log::info!("{}", message);
            match &on_calculate {
                Some(on_calculate) => on_calculate.emit(message),
                None => gloo::dialogs::alert(&message),
            }
        })
    };

    let can_delete = tags.can_delete();

    html! {
        <div class="formula-input" style={CONTAINER_STYLE}>
            <div class="tag-container" style={TAG_CONTAINER_STYLE}>
                { for tags.iter().enumerate().map(|(index, tag)| html! {
                    <TagField
                        key={index.to_string()}
                        index={index}
                        value={tag.to_string()}
                        can_delete={can_delete}
                        on_change={on_change.clone()}
                        on_delete={on_delete.clone()}
                    />
                }) }
            </div>
            <OperationButtons on_operation={on_operation} />
            <div>
                <button class="add-button" style={BUTTON_STYLE} onclick={add_onclick}>
                    { "Add Tag" }
                </button>
                <button class="calculate-button" style={BUTTON_STYLE} onclick={calculate_onclick}>
                    { "Calculate" }
                </button>
            </div>
        </div>
    }
}

#[function_component(TagField)]
pub fn tag_field(props: &TagFieldProps) -> Html {
    let index = props.index;

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((index, input.value()));
        })
    };

    let ondelete = props.on_delete.reform(move |_: MouseEvent| index);

    html! {
        <div class="tag" style={TAG_STYLE}>
            <input
                type="text"
                value={props.value.clone()}
                {oninput}
            />
            if props.can_delete {
                <button class="delete-button" style={BUTTON_STYLE} onclick={ondelete}>
                    { "Delete" }
                </button>
            }
        </div>
    }
}

#[function_component(OperationButtons)]
pub fn operation_buttons(props: &OperationButtonsProps) -> Html {
    html! {
        <div class="operation-buttons">
            { for Operator::ALL.into_iter().map(|op| {
                let onclick = props.on_operation.reform(move |_: MouseEvent| op);
                html! {
                    <button key={op.symbol()} class="operation-button" style={BUTTON_STYLE} {onclick}>
                        { op.symbol() }
                    </button>
                }
            }) }
        </div>
    }
}
