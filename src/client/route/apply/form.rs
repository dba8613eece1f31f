use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{api::application::submit_application, constant::SUBMIT_ERROR_MESSAGE},
    model::{
        application::{AnswerDto, ApplicationDto, ValidationError},
        user::UserDto,
    },
};

/// The application form.
///
/// Runs `validate` on the character name before anything is sent; a failure shows the
/// message inline and makes no request. The submit button is disabled while the
/// submission is in flight. `on_submitted` fires once the server accepted it.
#[component]
pub fn ApplicationForm(
    questions: Vec<String>,
    user: UserDto,
    validate: Callback<String, Result<(), ValidationError>>,
    on_submitted: EventHandler<()>,
) -> Element {
    let mut real_name = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut char_name = use_signal(String::new);
    let mut storyline = use_signal(String::new);
    let mut read_rules = use_signal(String::new);
    let mut char_gender = use_signal(String::new);
    let mut rp_years = use_signal(String::new);

    let question_count = questions.len();
    let mut answers = use_signal(move || vec![String::new(); question_count]);

    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = {
        let questions = questions.clone();
        let username = user.username.clone();

        move |evt: FormEvent| {
            evt.prevent_default();

            if submitting() {
                return;
            }

            let name = char_name().trim().to_string();
            if let Err(e) = validate.call(name.clone()) {
                error.set(Some(e.to_string()));
                return;
            }
            error.set(None);

            let application = ApplicationDto {
                real_name: real_name().trim().to_string(),
                dob: dob(),
                char_name: name,
                storyline: storyline().trim().to_string(),
                read_rules: read_rules(),
                char_gender: char_gender(),
                rp_years: rp_years(),
                discord: username.clone(),
                answers: questions
                    .iter()
                    .zip(answers.read().iter())
                    .map(|(question, answer)| AnswerDto {
                        question: question.clone(),
                        answer: answer.trim().to_string(),
                    })
                    .collect(),
            };

            submitting.set(true);
            spawn(async move {
                match submit_application(&application).await {
                    Ok(()) => on_submitted.call(()),
                    Err(e) => {
                        tracing::error!("Failed to submit application: {}", e);
                        error.set(Some(SUBMIT_ERROR_MESSAGE.to_string()));
                    }
                }
                submitting.set(false);
            });
        }
    };

    rsx! {
        form {
            class: "card form",
            onsubmit,
            h1 { "Whitelist Application" }

            div {
                class: "field",
                label { r#for: "realName", "Real name" }
                input {
                    id: "realName",
                    r#type: "text",
                    required: true,
                    value: "{real_name}",
                    oninput: move |evt| real_name.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { r#for: "dob", "Date of birth" }
                input {
                    id: "dob",
                    r#type: "date",
                    required: true,
                    value: "{dob}",
                    oninput: move |evt| dob.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { r#for: "charName", "Character name" }
                input {
                    id: "charName",
                    r#type: "text",
                    required: true,
                    placeholder: "Firstname_Lastname",
                    value: "{char_name}",
                    oninput: move |evt| char_name.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { r#for: "storyline", "Character storyline" }
                textarea {
                    id: "storyline",
                    required: true,
                    rows: 5,
                    value: "{storyline}",
                    oninput: move |evt| storyline.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { r#for: "readRules", "Have you read the rules?" }
                select {
                    id: "readRules",
                    required: true,
                    value: "{read_rules}",
                    onchange: move |evt| read_rules.set(evt.value()),
                    option { value: "", disabled: true, "Select" }
                    option { value: "Yes", "Yes" }
                    option { value: "No", "No" }
                }
            }
            div {
                class: "field",
                label { r#for: "charGender", "Character gender" }
                select {
                    id: "charGender",
                    required: true,
                    value: "{char_gender}",
                    onchange: move |evt| char_gender.set(evt.value()),
                    option { value: "", disabled: true, "Select" }
                    option { value: "Male", "Male" }
                    option { value: "Female", "Female" }
                    option { value: "Other", "Other" }
                }
            }
            div {
                class: "field",
                label { r#for: "rpYears", "Years of roleplay experience" }
                input {
                    id: "rpYears",
                    r#type: "number",
                    min: 0,
                    required: true,
                    value: "{rp_years}",
                    oninput: move |evt| rp_years.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { r#for: "discord", "Discord" }
                input {
                    id: "discord",
                    r#type: "text",
                    readonly: true,
                    value: "{user.username}",
                }
            }

            h2 { "Questions" }
            for (index, question) in questions.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "field",
                    label { r#for: "question-{index}", "{question}" }
                    input {
                        id: "question-{index}",
                        r#type: "text",
                        required: true,
                        placeholder: "Your answer here",
                        value: answers.read()[index].clone(),
                        oninput: move |evt| answers.write()[index] = evt.value(),
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "status-error", "{message}" }
            }

            button {
                class: "btn",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Submitting..." } else { "Submit application" }
            }
        }
    }
}
