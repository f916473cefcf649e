use clap::Parser;
use tracing_subscriber::EnvFilter;
use json_form::core::parse_form_data::{parse_field, parse_form_data};
use json_form::core::submit::{handle_form_submit, FormSubmitter};
use json_form::core::form_to_json::form_to_json_string;
use json_form::models::args::Args;
use json_form::models::form::Form;
use json_form::models::submit_event::SubmitEvent;
use json_form::models::submit_options::SubmitOptions;

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut form = Form::new(args.action);
    if let Some(ref form_str) = args.form {
        form.elements.extend(parse_form_data(form_str));
    }
    for field in &args.fields {
        form.push(parse_field(field));
    }

    if args.verbose {
        println!("{}", form_to_json_string(&form.elements));
    }

    let submitter = FormSubmitter::new(SubmitOptions {
        page_url: args.page_url,
        timeout_secs: args.timeout,
        cookie: args.cookie,
        user_agent: None,
    })?;

    let mut event = SubmitEvent::new(form);
    // the cli has nothing else to do, so wait for the request to finish
    handle_form_submit(&mut event, &submitter).await?;
    Ok(())
}
