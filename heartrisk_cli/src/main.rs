use clap::Parser;
use heartrisk_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

const ALARM_STYLE: &str = "\x1b[41;97m";
const NORMAL_STYLE: &str = "\x1b[42;97m";
const RESET_STYLE: &str = "\x1b[0m";

#[derive(Parser)]
#[command(name = "heartrisk")]
#[command(about = "Heart disease prediction form", long_about = None)]
struct Cli {
    /// Override the artifacts directory (model.json, mean_std_values.json)
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Skip the interactive session: predict once with the current values
    #[arg(long)]
    accept_defaults: bool,

    /// Age, 18-100
    #[arg(long)]
    age: Option<String>,

    /// Sex: Male / Female
    #[arg(long)]
    sex: Option<String>,

    /// Chest pain type: Typical Angina / Atypical Angina / Non-anginal Pain / Asymptomatic
    #[arg(long)]
    cp: Option<String>,

    /// Resting blood pressure, 90-200
    #[arg(long)]
    trestbps: Option<String>,

    /// Cholesterol, 100-600
    #[arg(long)]
    chol: Option<String>,

    /// Fasting blood sugar > 120 mg/dl: False / True
    #[arg(long)]
    fbs: Option<String>,

    /// Resting ECG: Normal / ST-T Abnormality / Left Ventricular Hypertrophy
    #[arg(long)]
    restecg: Option<String>,

    /// Maximum heart rate achieved, 70-220
    #[arg(long)]
    thalach: Option<String>,

    /// Exercise induced angina: No / Yes
    #[arg(long)]
    exang: Option<String>,

    /// ST depression induced by exercise, 0.0-6.2
    #[arg(long)]
    oldpeak: Option<String>,

    /// Slope of peak exercise ST segment: Upsloping / Flat / Downsloping
    #[arg(long)]
    slope: Option<String>,

    /// Number of major vessels colored by fluoroscopy, 0-4
    #[arg(long)]
    ca: Option<String>,

    /// Thalassemia: Normal / Fixed Defect / Reversible Defect
    #[arg(long)]
    thal: Option<String>,
}

impl Cli {
    /// Pre-seed form fields from per-field flags
    fn apply_to(&self, form: &mut FormState) -> Result<()> {
        let flags: [(&str, &Option<String>); 13] = [
            ("age", &self.age),
            ("sex", &self.sex),
            ("cp", &self.cp),
            ("trestbps", &self.trestbps),
            ("chol", &self.chol),
            ("fbs", &self.fbs),
            ("restecg", &self.restecg),
            ("thalach", &self.thalach),
            ("exang", &self.exang),
            ("oldpeak", &self.oldpeak),
            ("slope", &self.slope),
            ("ca", &self.ca),
            ("thal", &self.thal),
        ];

        for (key, value) in flags {
            if let Some(input) = value {
                form.set_by_key(key, input)?;
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    heartrisk_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let paths = config.artifact_paths(cli.artifacts_dir.as_deref());
    let store = ArtifactStore::load(&paths);

    // Missing or corrupt artifacts are reported but never fatal: the form
    // still runs and predictions fail with an in-session message.
    for error in store.load_errors() {
        eprintln!("Error: {}", error);
    }
    tracing::info!(ready = store.is_ready(), "artifact store initialized");

    let mut form = FormState::default();
    cli.apply_to(&mut form)?;

    println!("\nHeart Disease Prediction");

    if cli.accept_defaults {
        render_form(&form);
        predict_and_render(&store, &form);
        return Ok(());
    }

    session_loop(&store, &mut form)
}

/// Interactive prompt loop: predict, edit a field, or quit
fn session_loop(store: &ArtifactStore, form: &mut FormState) -> Result<()> {
    loop {
        render_form(form);
        println!("─────────────────────────────────────────");
        println!("Press Enter to predict");
        println!("  'e <n>' + Enter to edit field n");
        println!("  'q' + Enter to quit");
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // stdin closed
            return Ok(());
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        if let Some(rest) = input.strip_prefix('e').or_else(|| input.strip_prefix('E')) {
            match rest.trim().parse::<usize>() {
                Ok(n) if (1..=FORM_FIELDS.len()).contains(&n) => {
                    if let Err(e) = edit_field(form, n - 1) {
                        println!("An error occurred: {}", e);
                    }
                }
                _ => println!("Expected a field number between 1 and {}", FORM_FIELDS.len()),
            }
            continue;
        }

        predict_and_render(store, form);
    }
}

/// Prompt for a new value for one field
fn edit_field(form: &mut FormState, index: usize) -> Result<()> {
    let field = &FORM_FIELDS[index];
    println!(
        "{} [{}] (current: {})",
        field.label,
        field.domain_hint(),
        field.display_value(form.value(index))
    );
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    if input.trim().is_empty() {
        // Keep current value
        return Ok(());
    }

    form.set_from_input(index, &input)
}

fn render_form(form: &FormState) {
    println!();
    for (i, field) in FORM_FIELDS.iter().enumerate() {
        println!(
            "  {:>2}. {:<50} {}",
            i + 1,
            field.label,
            field.display_value(form.value(i))
        );
    }
}

/// Run the predictor over the current form values and render the outcome.
///
/// Any failure is rendered in-session; nothing propagates.
fn predict_and_render(store: &ArtifactStore, form: &FormState) {
    let record = form.assemble();
    match run_prediction(store, &record) {
        Ok(result) => render_panel(&result),
        Err(e) => println!("\nAn error occurred: {}", e),
    }
}

fn render_panel(result: &PredictionResult) {
    let verdict = result.verdict();
    let style = if verdict.is_alarm() {
        ALARM_STYLE
    } else {
        NORMAL_STYLE
    };
    let pct = confidence_percent(result.confidence);

    println!();
    println!("{}                                         {}", style, RESET_STYLE);
    println!("{}  Prediction: {:<27}{}", style, verdict.text(), RESET_STYLE);
    println!("{}  Confidence: {:<27}{}", style, format!("{:.2}%", pct), RESET_STYLE);
    println!("{}                                         {}", style, RESET_STYLE);
    println!();
}
