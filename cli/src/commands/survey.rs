//! Interactive survey on the terminal
//!
//! Each step is rendered from the wizard's view and answered line by line.
//! An empty answer keeps the current value, `<` goes back one step and `-`
//! clears an optional field.

use colored::Colorize;
use feedback_client::steps::{
    ChoiceView, CommentsView, DemographicsView, InputView, LanguageView, RatingsView, SuccessView,
};
use feedback_client::{ClientConfig, FormWizard, Progress, StepView, ToastKind};
use feedback_core::{FieldUpdate, Language};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

use super::http_submitter;

pub async fn handle(config: &ClientConfig, language: Option<Language>) -> anyhow::Result<()> {
    let mut wizard =
        FormWizard::with_toast_lifetime(http_submitter(config)?, config.toast_lifetime());
    let stdin = io::stdin();
    run_survey(&mut wizard, language, stdin.lock(), io::stdout()).await
}

/// What the step asked the wizard to do next
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Advance,
    Back,
    Stay,
    Quit,
}

enum Answer {
    Text(String),
    Keep,
    Back,
    Quit,
}

/// Unwraps an answer, returning early from the step on `<` or end of input.
macro_rules! answer {
    ($e:expr) => {
        match $e? {
            Answer::Text(text) => Some(text),
            Answer::Keep => None,
            Answer::Back => return Ok(Flow::Back),
            Answer::Quit => return Ok(Flow::Quit),
        }
    };
}

pub async fn run_survey<R: BufRead, W: Write>(
    wizard: &mut FormWizard,
    language: Option<Language>,
    input: R,
    output: W,
) -> anyhow::Result<()> {
    let mut term = Terminal {
        input,
        output,
        last_toast: 0,
    };

    if let Some(language) = language {
        wizard.select_language(language);
    }

    loop {
        term.show_toasts(wizard)?;

        let flow = match wizard.view() {
            StepView::Language(view) => language_step(&mut term, wizard, &view)?,
            StepView::Demographics(view) => demographics_step(&mut term, wizard, &view)?,
            StepView::Ratings(view) => ratings_step(&mut term, wizard, &view)?,
            StepView::Comments(view) => comments_step(&mut term, wizard, &view)?,
            StepView::Success(view) => success_step(&mut term, wizard, &view, language)?,
        };

        match flow {
            Flow::Advance => {
                let outcome = wizard.advance().await;
                tracing::debug!(?outcome, "advance");
            }
            Flow::Back => {
                wizard.retreat();
            }
            Flow::Stay => {}
            Flow::Quit => break,
        }
    }

    term.show_toasts(wizard)?;
    term.output.flush()?;
    Ok(())
}

struct Terminal<R, W> {
    input: R,
    output: W,
    last_toast: u64,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    fn ask(&mut self, label: &str, current: &str) -> anyhow::Result<Answer> {
        if current.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} [{}]: ", label, current.dimmed())?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(Answer::Quit);
        }

        Ok(match line.trim() {
            "" => Answer::Keep,
            "<" => Answer::Back,
            text => Answer::Text(text.to_string()),
        })
    }

    fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn header(&mut self, title: &str, progress: Option<Progress>) -> io::Result<()> {
        writeln!(self.output)?;
        match progress {
            Some(p) => {
                let done = usize::from(p.current);
                let left = usize::from(p.total.saturating_sub(p.current));
                writeln!(
                    self.output,
                    "{}  [{}{}] {}/{}",
                    title.bold(),
                    "■".repeat(done),
                    "□".repeat(left),
                    p.current,
                    p.total
                )
            }
            None => writeln!(self.output, "{}", title.bold()),
        }
    }

    fn ask_input(&mut self, view: &InputView) -> anyhow::Result<Answer> {
        if let Some(error) = &view.error {
            self.say(format!("  {}", error).red())?;
        }
        self.ask(&label(view.label, view.required), &view.value)
    }

    fn ask_choice<T: Copy + PartialEq>(&mut self, view: &ChoiceView<T>) -> anyhow::Result<Answer> {
        if let Some(error) = &view.error {
            self.say(format!("  {}", error).red())?;
        }
        for (i, (_, name)) in view.options.iter().enumerate() {
            self.say(format!("  {:>2}) {}", i + 1, name))?;
        }
        let current = view
            .options
            .iter()
            .find(|(value, _)| Some(*value) == view.selected)
            .map(|(_, name)| *name)
            .or(view.placeholder)
            .unwrap_or_default();
        self.ask(&label(view.label, view.required), current)
    }

    /// Print toasts raised since the last call, then drop expired ones.
    fn show_toasts(&mut self, wizard: &mut FormWizard) -> io::Result<()> {
        let fresh: Vec<_> = wizard
            .toasts()
            .iter()
            .filter(|t| t.id > self.last_toast)
            .cloned()
            .collect();

        for toast in fresh {
            self.last_toast = toast.id;
            match toast.kind {
                ToastKind::Error => self.say(format!("✗ {}", toast.message).red())?,
                ToastKind::Success => self.say(format!("✓ {}", toast.message).green())?,
            }
        }

        wizard.expire_toasts(Instant::now());
        Ok(())
    }
}

fn label(text: &str, required: bool) -> String {
    if required {
        format!("{} *", text)
    } else {
        text.to_string()
    }
}

/// Resolve an answer to a choice: 1-based number, code, or label.
fn pick<T: Copy + FromStr>(options: &[(T, &str)], text: &str) -> Option<T> {
    if let Ok(n) = text.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).map(|(v, _)| *v);
    }
    text.parse().ok().or_else(|| {
        options
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(text))
            .map(|(v, _)| *v)
    })
}

fn language_step<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    wizard: &mut FormWizard,
    view: &LanguageView,
) -> anyhow::Result<Flow> {
    term.header(view.title, None)?;
    term.say(view.subtitle)?;
    term.say("")?;

    let options: Vec<(Language, &str)> =
        view.options.iter().map(|o| (o.language, o.label)).collect();
    for (i, option) in view.options.iter().enumerate() {
        term.say(format!("  {}) {} ({})", i + 1, option.label, option.sub_label))?;
    }
    let current = view
        .options
        .iter()
        .find(|o| o.selected)
        .map(|o| o.label)
        .unwrap_or_default();

    let choice = match term.ask(view.prompt, current)? {
        Answer::Text(text) => pick(&options, &text),
        Answer::Keep => view.options.iter().find(|o| o.selected).map(|o| o.language),
        Answer::Back => return Ok(Flow::Stay),
        Answer::Quit => return Ok(Flow::Quit),
    };

    match choice {
        Some(language) => {
            wizard.select_language(language);
        }
        None => term.say("?".red())?,
    }
    Ok(Flow::Stay)
}

fn demographics_step<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    wizard: &mut FormWizard,
    view: &DemographicsView,
) -> anyhow::Result<Flow> {
    let t = wizard.strings();
    term.header(t.title, Some(view.progress))?;

    if let Some(text) = answer!(term.ask_input(&view.name)) {
        wizard.update_field(FieldUpdate::PatientName(text));
    }
    if let Some(text) = answer!(term.ask_input(&view.phone)) {
        wizard.update_field(FieldUpdate::PhoneNumber(text));
    }
    if let Some(text) = answer!(term.ask_input(&view.age)) {
        match text.as_str() {
            "-" => wizard.update_field(FieldUpdate::Age(None)),
            _ => match text.parse::<u8>() {
                Ok(age) => wizard.update_field(FieldUpdate::Age(Some(age))),
                Err(_) => term.say(format!("  {}", t.errors.age_out_of_range).red())?,
            },
        }
    }
    if let Some(text) = answer!(term.ask_choice(&view.gender)) {
        match text.as_str() {
            "-" => wizard.update_field(FieldUpdate::Gender(None)),
            _ => match pick(&view.gender.options, &text) {
                Some(gender) => wizard.update_field(FieldUpdate::Gender(Some(gender))),
                None => term.say("  ?".red())?,
            },
        }
    }
    if let Some(text) = answer!(term.ask_choice(&view.department)) {
        match pick(&view.department.options, &text) {
            Some(department) => wizard.update_field(FieldUpdate::Department(department)),
            None => term.say("  ?".red())?,
        }
    }

    term.say(format!("{} →", view.next_label).dimmed())?;
    Ok(Flow::Advance)
}

fn ratings_step<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    wizard: &mut FormWizard,
    view: &RatingsView,
) -> anyhow::Result<Flow> {
    term.header(wizard.strings().title, Some(view.progress))?;

    for row in &view.rows {
        let current = match row.value_label {
            Some(name) => format!("{} {}", "★".repeat(usize::from(row.value)), name),
            None => String::new(),
        };
        if let Some(text) = answer!(term.ask(&format!("{} (1-5)", row.label), &current)) {
            let result = text
                .parse::<u8>()
                .map_err(|_| format!("{} (1-5)", row.label))
                .and_then(|value| {
                    wizard
                        .set_rating(row.dimension, value)
                        .map_err(|e| e.to_string())
                });
            if let Err(message) = result {
                term.say(format!("  {}", message).red())?;
            }
        }
    }

    term.say(format!("{} →", view.next_label).dimmed())?;
    Ok(Flow::Advance)
}

fn comments_step<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    wizard: &mut FormWizard,
    view: &CommentsView,
) -> anyhow::Result<Flow> {
    term.header(wizard.strings().title, Some(view.progress))?;
    term.say(view.heading.bold())?;
    term.say(view.hint)?;

    if let Some(text) = answer!(term.ask(view.label, &view.value)) {
        let text = if text == "-" { String::new() } else { text };
        wizard.update_field(FieldUpdate::Comments(text));
    }

    term.say(wizard.strings().submitting.dimmed())?;
    Ok(Flow::Advance)
}

fn success_step<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    wizard: &mut FormWizard,
    view: &SuccessView,
    language: Option<Language>,
) -> anyhow::Result<Flow> {
    term.say("")?;
    term.say(view.title.green().bold())?;
    term.say(view.message)?;
    if let Some(id) = &view.receipt_id {
        term.say(format!("#{}", id).dimmed())?;
    }

    match term.ask(&format!("{} [y/N]", view.another_label), "")? {
        Answer::Text(text) if text.eq_ignore_ascii_case("y") => {
            wizard.reset();
            if let Some(language) = language {
                wizard.select_language(language);
            }
            Ok(Flow::Stay)
        }
        _ => Ok(Flow::Quit),
    }
}
