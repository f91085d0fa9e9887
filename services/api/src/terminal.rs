use crate::infra::{load_service, parse_answer};
use clap::Args;
use std::io::{self, BufRead, Write};
use sweets_quiz::error::AppError;
use sweets_quiz::quiz::{
    Answer, Diagnosis, DiagnosisService, Item, ItemId, Question, QuestionSet, RandomSource,
    SessionError, SessionStep,
};

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Show a single sweet by id instead of the whole catalog
    #[arg(long)]
    pub(crate) id: Option<u32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DiagnoseArgs {
    /// One answer as QUESTION=VALUE; repeat for each question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<Answer>,
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let service = load_service()?;
    let mut out = io::stdout().lock();
    render_questions(&mut out, service.questions())?;
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let mut out = io::stdout().lock();

    match args.id {
        Some(id) => {
            let item = service.result(ItemId(id))?;
            render_item(&mut out, item)?;
        }
        None => {
            for item in service.catalog() {
                writeln!(
                    out,
                    "{:>3}  {} ({}, {}, {})",
                    item.id.0, item.name, item.category, item.sweetness, item.price_range
                )?;
            }
        }
    }

    Ok(())
}

pub(crate) fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let diagnosis = service.diagnose(&args.answers);
    let mut out = io::stdout().lock();
    render_diagnosis(&mut out, &diagnosis)?;
    Ok(())
}

pub(crate) fn run_play() -> Result<(), AppError> {
    let service = load_service()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    writeln!(out, "Sweets Quiz")?;
    writeln!(
        out,
        "Tell us how you feel and we will pick the sweet for you."
    )?;

    loop {
        let Some(diagnosis) = play_session(&service, &mut input, &mut out)? else {
            return Ok(());
        };
        render_diagnosis(&mut out, &diagnosis)?;

        write!(out, "\nTake the quiz again? [y/N] ")?;
        out.flush()?;
        let again = read_trimmed(&mut input)?;
        if !matches!(again.as_deref(), Some("y") | Some("Y") | Some("yes")) {
            return Ok(());
        }
    }
}

/// Runs one session over `input`. Returns `None` when input ends before the last answer.
pub(crate) fn play_session<R, I, W>(
    service: &DiagnosisService<R>,
    input: &mut I,
    out: &mut W,
) -> Result<Option<Diagnosis>, AppError>
where
    R: RandomSource + 'static,
    I: BufRead,
    W: Write,
{
    let mut session = service.session();

    while let Some(question) = session.current() {
        let (shown, total) = session.position();
        writeln!(
            out,
            "\n[{}] {} / {} ({:.0}%)",
            progress_bar(session.progress_percent()),
            shown,
            total,
            session.progress_percent()
        )?;
        render_question(out, question)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(raw) = read_trimmed(input)? else {
            return Ok(None);
        };
        let value = resolve_choice(question, &raw);

        match session.answer(&value) {
            Ok(SessionStep::Complete(answers)) => return Ok(Some(service.diagnose(&answers))),
            Ok(SessionStep::Next(_)) => {}
            Err(err @ SessionError::UnknownOption { .. }) => {
                writeln!(out, "{err}; pick one of the listed numbers")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Some(service.diagnose(session.answers())))
}

/// Accepts either the one-based option number or the option value itself.
fn resolve_choice(question: &Question, raw: &str) -> String {
    raw.parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| question.options.get(index))
        .map(|option| option.value.clone())
        .unwrap_or_else(|| raw.to_string())
}

fn read_trimmed<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn progress_bar(percent: f32) -> String {
    const WIDTH: usize = 20;
    let filled = ((percent / 100.0) * WIDTH as f32).round() as usize;
    let filled = filled.min(WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(WIDTH - filled))
}

fn render_questions<W: Write>(out: &mut W, questions: &QuestionSet) -> io::Result<()> {
    for question in questions.questions() {
        writeln!(out, "Q{}", question.id)?;
        render_question(out, question)?;
    }
    Ok(())
}

fn render_question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    writeln!(out, "{}", question.question)?;
    for (index, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}. {} [{}]", index + 1, option.label, option.value)?;
    }
    Ok(())
}

fn render_item<W: Write>(out: &mut W, item: &Item) -> io::Result<()> {
    writeln!(out, "{} ({})", item.name, item.category)?;
    writeln!(out, "  {}", item.description)?;
    writeln!(out, "  Why it fits: {}", item.recommendation)?;
    writeln!(
        out,
        "  Price range: {} | Sweetness: {}",
        item.price_range, item.sweetness
    )?;
    Ok(())
}

pub(crate) fn render_diagnosis<W: Write>(out: &mut W, diagnosis: &Diagnosis) -> io::Result<()> {
    writeln!(out, "\nYour sweet is...")?;
    render_item(out, &diagnosis.item)?;
    writeln!(
        out,
        "  Chosen by {} (score {})",
        diagnosis.selection.label(),
        diagnosis.score
    )?;
    for component in &diagnosis.matches {
        writeln!(
            out,
            "    - {} '{}' +{}",
            component.dimension.label(),
            component.value,
            component.points
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;
    use sweets_quiz::quiz::{Catalog, FixedIndex, Selection};

    fn service() -> DiagnosisService<FixedIndex> {
        DiagnosisService::new(
            Arc::new(Catalog::builtin().expect("bundled catalog")),
            Arc::new(QuestionSet::builtin().expect("bundled questions")),
            FixedIndex(0),
        )
    }

    #[test]
    fn plays_a_session_with_numbers_and_values() {
        let service = service();
        let mut input = Cursor::new("1\nevening\n1\n5\nbitter\n");
        let mut out = Vec::new();

        let diagnosis = play_session(&service, &mut input, &mut out)
            .expect("session runs")
            .expect("session completes");

        assert_eq!(diagnosis.item.id, ItemId(1));
        assert_eq!(diagnosis.selection, Selection::TopScore);
        let transcript = String::from_utf8(out).expect("utf8 output");
        assert!(transcript.contains("1 / 5 (20%)"));
        assert!(transcript.contains("5 / 5 (100%)"));
    }

    #[test]
    fn reprompts_on_unknown_options() {
        let service = service();
        let mut input = Cursor::new("chocolate\n2\n");
        let mut out = Vec::new();

        let diagnosis = play_session(&service, &mut input, &mut out).expect("session runs");

        assert!(diagnosis.is_none());
        let transcript = String::from_utf8(out).expect("utf8 output");
        assert!(transcript.contains("'chocolate' is not an option for question 1"));
        assert!(transcript.contains("2 / 5"));
    }

    #[test]
    fn renders_matches_in_the_result() {
        let service = service();
        let diagnosis = service.diagnose(&[Answer::new(1, "relax"), Answer::new(5, "bitter")]);
        let mut out = Vec::new();

        render_diagnosis(&mut out, &diagnosis).expect("render");

        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.contains("Dark Chocolate Bar"));
        assert!(text.contains("mood 'relax' +3"));
        assert!(text.contains("sweetness 'bitter' +2"));
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0), "-".repeat(20));
        assert_eq!(progress_bar(100.0), "#".repeat(20));
        assert_eq!(progress_bar(40.0), format!("{}{}", "#".repeat(8), "-".repeat(12)));
    }
}
