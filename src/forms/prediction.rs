use std::collections::BTreeMap;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::draft::{self, Draft};
use crate::forms::progress::{self, Progress};
use crate::forms::validation::{self, FieldRule, Verdict};

enum Control {
    Number { min: f64, max: f64, step: &'static str },
    Select(&'static [(&'static str, &'static str)]),
    TextArea { placeholder: &'static str },
}

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    required: bool,
    control: Control,
}

impl FieldSpec {
    fn rule(&self) -> FieldRule {
        match &self.control {
            Control::Number { min, max, .. } => FieldRule::number(self.required, *min, *max),
            Control::Select(_) | Control::TextArea { .. } => FieldRule::text(self.required),
        }
    }
}

const SEX_OPTIONS: &[(&str, &str)] = &[("", "Select sex"), ("M", "Male"), ("F", "Female")];
const SMOKER_OPTIONS: &[(&str, &str)] = &[("", "Select"), ("no", "Non-smoker"), ("yes", "Smoker")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "age",
        label: "Age",
        required: true,
        control: Control::Number { min: 1.0, max: 120.0, step: "1" },
    },
    FieldSpec {
        name: "sex",
        label: "Sex",
        required: true,
        control: Control::Select(SEX_OPTIONS),
    },
    FieldSpec {
        name: "bmi",
        label: "Body mass index",
        required: true,
        control: Control::Number { min: 10.0, max: 60.0, step: "0.1" },
    },
    FieldSpec {
        name: "systolic_bp",
        label: "Systolic blood pressure (mmHg)",
        required: true,
        control: Control::Number { min: 70.0, max: 250.0, step: "1" },
    },
    FieldSpec {
        name: "cholesterol",
        label: "Total cholesterol (mg/dL)",
        required: true,
        control: Control::Number { min: 100.0, max: 400.0, step: "1" },
    },
    FieldSpec {
        name: "smoker",
        label: "Smoking status",
        required: true,
        control: Control::Select(SMOKER_OPTIONS),
    },
    FieldSpec {
        name: "notes",
        label: "Anything else we should know?",
        required: false,
        control: Control::TextArea { placeholder: "Optional: relevant history, medication, ..." },
    },
];

#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let values = use_state(Draft::new);
    let verdicts = use_state(BTreeMap::<String, Verdict>::new);
    let submitting = use_state(|| false);
    let form_ref = use_node_ref();

    // Restore any saved draft once, before the user touches anything.
    {
        let values = values.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(saved) = draft::load(config::DRAFT_KEY) {
                    let names: Vec<&str> = FIELDS.iter().map(|f| f.name).collect();
                    let saved = draft::matching_fields(saved, &names);
                    if !saved.is_empty() {
                        values.set(saved);
                    }
                }
                || ()
            },
            (),
        );
    }

    // Every edit updates the value, clears that field's validation mark and
    // rewrites the whole draft.
    let on_edit = {
        let values = values.clone();
        let verdicts = verdicts.clone();
        Callback::from(move |(name, value): (String, String)| {
            let mut next = (*values).clone();
            next.insert(name.clone(), value);
            draft::save(config::DRAFT_KEY, &next);
            values.set(next);

            let mut next = (*verdicts).clone();
            if next.remove(&name).is_some() {
                verdicts.set(next);
            }
        })
    };

    let on_blur = {
        let values = values.clone();
        let verdicts = verdicts.clone();
        Callback::from(move |name: String| {
            let Some(spec) = FIELDS.iter().find(|f| f.name == name) else { return };
            let value = values.get(&name).cloned().unwrap_or_default();
            let mut next = (*verdicts).clone();
            next.insert(name, validation::validate(&spec.rule(), &value));
            verdicts.set(next);
        })
    };

    // Validation may block the submit; otherwise the browser carries it out
    // normally while the button flips into its loading state.
    let onsubmit = {
        let values = values.clone();
        let verdicts = verdicts.clone();
        let submitting = submitting.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            let mut all = BTreeMap::new();
            let mut first_invalid = None;
            for spec in FIELDS {
                let value = values.get(spec.name).cloned().unwrap_or_default();
                let verdict = validation::validate(&spec.rule(), &value);
                if verdict.is_err() && first_invalid.is_none() {
                    first_invalid = Some(spec.name);
                }
                all.insert(spec.name.to_string(), verdict);
            }
            verdicts.set(all);

            if let Some(name) = first_invalid {
                e.prevent_default();
                validation::focus_field(&form_ref, name);
            } else {
                submitting.set(true);
            }
        })
    };

    let progress = Progress::measure(
        FIELDS
            .iter()
            .map(|spec| values.get(spec.name).map(String::as_str).unwrap_or("")),
    );
    let required_ok = progress::required_complete(
        FIELDS
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| values.get(spec.name).map(String::as_str).unwrap_or("")),
    );

    html! {
        <form
            ref={form_ref}
            class="prediction-form"
            action="/api/predict"
            method="post"
            novalidate=true
            onsubmit={onsubmit}
        >
            <div class="form-progress">
                <div class="progress-bar">
                    <div class="progress-fill" style={format!("width: {}%", progress.percent())}></div>
                </div>
                <p class={classes!("progress-text", progress.is_complete().then(|| "complete"))}>
                    { progress.status_line() }
                </p>
            </div>

            { for FIELDS.iter().map(|spec| render_field(spec, &values, &verdicts, &on_edit, &on_blur)) }

            <button
                type="submit"
                class={classes!("btn", "btn-predict", (*submitting).then(|| "loading"))}
                disabled={!required_ok || *submitting}
            >
                { if *submitting { "Processing..." } else { "Get Prediction" } }
            </button>
        </form>
    }
}

fn render_field(
    spec: &'static FieldSpec,
    values: &UseStateHandle<Draft>,
    verdicts: &UseStateHandle<BTreeMap<String, Verdict>>,
    on_edit: &Callback<(String, String)>,
    on_blur: &Callback<String>,
) -> Html {
    let value = values.get(spec.name).cloned().unwrap_or_default();
    let verdict = verdicts.get(spec.name);
    let control_class = classes!("form-control", validation::verdict_class(verdict));

    let onblur = {
        let on_blur = on_blur.clone();
        let name = spec.name;
        Callback::from(move |_: FocusEvent| on_blur.emit(name.to_string()))
    };

    let control = match &spec.control {
        Control::Number { min, max, step } => {
            let oninput = edit_callback(on_edit, spec.name, |e: InputEvent| {
                e.target_unchecked_into::<HtmlInputElement>().value()
            });
            html! {
                <input
                    type="number"
                    id={spec.name}
                    name={spec.name}
                    class={control_class}
                    value={value}
                    min={min.to_string()}
                    max={max.to_string()}
                    step={*step}
                    required={spec.required}
                    oninput={oninput}
                    onblur={onblur}
                />
            }
        }
        Control::Select(options) => {
            let onchange = edit_callback(on_edit, spec.name, |e: Event| {
                e.target_unchecked_into::<HtmlSelectElement>().value()
            });
            html! {
                <select
                    id={spec.name}
                    name={spec.name}
                    class={control_class}
                    required={spec.required}
                    onchange={onchange}
                    onblur={onblur}
                >
                    { for options.iter().map(|&(option_value, option_label)| html! {
                        <option value={option_value} selected={option_value == value}>{ option_label }</option>
                    }) }
                </select>
            }
        }
        Control::TextArea { placeholder } => {
            let oninput = edit_callback(on_edit, spec.name, |e: InputEvent| {
                e.target_unchecked_into::<HtmlTextAreaElement>().value()
            });
            html! {
                <textarea
                    id={spec.name}
                    name={spec.name}
                    class={control_class}
                    value={value}
                    placeholder={*placeholder}
                    oninput={oninput}
                    onblur={onblur}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={spec.name}>{ spec.label }</label>
            { control }
            {
                match verdict {
                    Some(Err(message)) => html! { <div class="invalid-feedback">{ message.clone() }</div> },
                    _ => html! {},
                }
            }
        </div>
    }
}

fn edit_callback<E: 'static>(
    on_edit: &Callback<(String, String)>,
    name: &'static str,
    extract: fn(E) -> String,
) -> Callback<E> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: E| on_edit.emit((name.to_string(), extract(e))))
}
