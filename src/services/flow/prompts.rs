//! Page builders for every prompt the flow shows.

use crate::types::{Command, ConsentTable, Page, PageBody, Question, RadioItem, Translatable};

fn render(platform: &str, header: Translatable, body: PageBody) -> Command {
    Command::RenderPage(Page {
        platform: Some(platform.to_string()),
        header: Some(header),
        body,
    })
}

pub fn file_prompt(platform: &str, accepted_media_types: &str) -> Command {
    let body = PageBody::FilePrompt {
        description: Translatable::new(
            "Please follow the download instructions and choose the file that you stored on your device.",
            "Volg de download instructies en kies het bestand dat u opgeslagen heeft op uw apparaat.",
        ),
        accepted_media_types: accepted_media_types.to_string(),
    };
    let header = Translatable::new(
        format!("Select your {platform} file"),
        format!("Selecteer uw {platform} bestand"),
    );
    render(platform, header, body)
}

/// Confirm = try again, cancel = stop.
pub fn retry_confirmation(platform: &str) -> Command {
    let body = PageBody::ConfirmPrompt {
        text: Translatable::new(
            format!("Unfortunately, we could not process your {platform} file. If you are sure that you selected the correct file, press Continue. To select a different file, press Try again."),
            format!("Helaas, kunnen we uw {platform} bestand niet verwerken. Weet u zeker dat u het juiste bestand heeft gekozen? Ga dan verder. Probeer opnieuw als u een ander bestand wilt kiezen."),
        ),
        confirm_label: Translatable::new("Try again", "Probeer opnieuw"),
        cancel_label: Translatable::new("Continue", "Verder"),
    };
    render(platform, Translatable::new("Try again", "Probeer opnieuw"), body)
}

pub fn profile_selection(platform: &str, profiles: &[String]) -> Command {
    let options = profiles
        .iter()
        .enumerate()
        .map(|(id, value)| RadioItem {
            id,
            value: value.clone(),
        })
        .collect();
    let body = PageBody::RadioSelect {
        title: Translatable::new(
            format!("Select your {platform} profile name"),
            format!("Kies jouw {platform} profielnaam"),
        ),
        description: Translatable::untranslated(""),
        options,
    };
    render(platform, Translatable::untranslated(""), body)
}

pub fn consent_form(platform: &str, tables: Vec<ConsentTable>) -> Command {
    let body = PageBody::ConsentForm {
        tables,
        description: Translatable::new(
            "Determine whether you want to share the data below. Review the data carefully and adjust if necessary. Only the data that is visualized will be shared. Your contribution will help the previously described research. Thank you in advance.",
            "Bepaal of u de onderstaande gegevens wilt delen. Bekijk de gegevens zorgvuldig en pas zo nodig aan. Alleen de gegevens die zijn gevisualiseerd, worden gedeeld. Met uw bijdrage helpt u het eerder beschreven onderzoek. Alvast hartelijk dank.",
        ),
        meta_tables: Vec::new(),
    };
    let header = Translatable::new(
        format!("Your {platform} data"),
        format!("Uw {platform} gegevens"),
    );
    render(platform, header, body)
}

/// Questionnaire after the consent step. Subjects who declined also get
/// the open question asking why.
pub fn questionnaire(platform: &str, donated: bool) -> Command {
    let mut questions = vec![recognition_question(platform), enjoyment_question()];
    if !donated {
        questions.push(Question::Open {
            id: 5,
            question: Translatable::new(
                "What is/are the reason(s) that you decided not to donate your data?",
                "Wat is de reden dat u er voor gekozen hebt uw data niet te delen?",
            ),
        });
    }
    questions.push(Question::Open {
        id: 4,
        question: Translatable::new(
            "Do you have any additional comments about the donation? Please add them here.",
            "Heeft u nog andere opmerkingen? Laat die hier achter.",
        ),
    });

    let body = PageBody::Questionnaire {
        questions,
        description: Translatable::new(
            "Below you can find a couple of questions about the data donation process",
            "Hieronder vindt u een paar vragen over het proces van het data delen",
        ),
    };
    render(platform, Translatable::new("Questionnaire", "Vragenlijst"), body)
}

pub fn end_page() -> Command {
    Command::RenderPage(Page {
        platform: None,
        header: None,
        body: PageBody::EndPage,
    })
}

fn recognition_question(platform: &str) -> Question {
    Question::MultipleChoice {
        id: 2,
        question: Translatable::new(
            format!("In case you looked at the data presented on this page, did you recognise your {platform} watching patterns?"),
            "Als u naar uw data gekeken hebt, in hoeverre herkent u uw eigen kijkgedrag?",
        ),
        choices: vec![
            Translatable::new(
                format!("I recognized my {platform} watching patterns"),
                format!("Ik herkende mijn {platform} kijkgedrag"),
            ),
            Translatable::new(
                format!("I recognized my {platform} watching patterns and patterns of those I share my account with"),
                format!("Ik herkende mijn eigen {platform} kijkgedrag en die van anderen met wie ik mijn account deel"),
            ),
            Translatable::new(
                "I recognized mostly the watching patterns of those I share my account with",
                "Ik herkende vooral het kijkgedrag van anderen met wie ik mijn account deel",
            ),
            Translatable::new("I did not look at my data", "Ik heb niet naar mijn gegevens gekeken"),
            Translatable::new("Other", "Anders"),
        ],
    }
}

fn enjoyment_question() -> Question {
    Question::MultipleChoice {
        id: 3,
        question: Translatable::new(
            "In case you looked at the data presented on this page, how interesting did you find looking at your data?",
            "Als u naar uw data hebt gekeken, hoe interessant vond u het om daar naar te kijken?",
        ),
        choices: vec![
            Translatable::new("not at all interesting", "Helemaal niet interessant"),
            Translatable::new("somewhat uninteresting", "Een beetje oninteressant"),
            Translatable::new("neither interesting nor uninteresting", "Niet interessant, niet oninteressant"),
            Translatable::new("somewhat interesting", "Een beetje interessant"),
            Translatable::new("very interesting", "Erg interessant"),
        ],
    }
}
