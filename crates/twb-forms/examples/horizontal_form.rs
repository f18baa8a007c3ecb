//! Renders a small sign-up form in each Bootstrap 3 layout.
//!
//! Pass `--verbose` to see the renderer's trace output:
//!
//! ```sh
//! cargo run -p twb-forms --example horizontal_form -- --verbose
//! ```

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use twb_forms::helpers::bootstrap::CatalogTranslator;
use twb_forms::{ElementKind, FormElement, Layout, RowRenderer};

/// Renders a sign-up form in every Bootstrap 3 layout.
#[derive(Parser)]
#[command(name = "horizontal_form")]
#[command(about, long_about = None)]
struct Cli {
    /// Enable trace output from the renderer.
    #[arg(short, long)]
    verbose: bool,
}

fn sign_up_form(layout: Layout) -> Vec<FormElement> {
    vec![
        FormElement::text("username")
            .attr("id", "username")
            .attr("class", "form-control")
            .label("Username")
            .help_block("Choose a unique username")
            .layout(layout),
        FormElement::new("email", &ElementKind::Other("email".to_string()))
            .attr("id", "email")
            .attr("class", "form-control")
            .label("Email")
            .value("not-an-email")
            .message("The input is not a valid email address")
            .layout(layout),
        FormElement::new("plan", &ElementKind::Radio)
            .label("Plan")
            .value_option("free", "Free")
            .value_option("pro", "Pro")
            .value("free")
            .layout(layout),
        FormElement::new("terms", &ElementKind::Checkbox)
            .label("I accept the terms")
            .layout(layout),
        FormElement::new("submit", &ElementKind::Submit)
            .attr("class", "btn btn-primary")
            .value("Sign up")
            .layout(layout),
    ]
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let translator = CatalogTranslator::from_json(
        r#"{"default": {"Username": "User name", "Plan": "Subscription plan"}}"#,
    )?;
    let renderer = RowRenderer::new().translator(translator);

    for layout in [Layout::Horizontal, Layout::Inline, Layout::Vertical] {
        info!(%layout, "rendering sign-up form");
        println!("{}", renderer.render_rows(&sign_up_form(layout)));
    }

    Ok(())
}
