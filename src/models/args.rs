use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "json-form", version, about, long_about = None)]
pub struct Args {
    /// Form action to post to
    #[arg(short, long)]
    pub action: String,

    /// Page hosting the form; relative actions resolve against it
    #[arg(short, long, env = "JSON_FORM_PAGE_URL")]
    pub page_url: Option<String>,

    /// A form field as name=value, may be repeated
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// Form fields as an urlencoded string, e.g. "a=1&b=2"
    #[arg(short, long)]
    pub form: Option<String>,

    /// Timeout in seconds, 0 disables
    #[arg(short, long, default_value_t = 0)]
    pub timeout: u64,

    /// Cookie sent with same-origin submissions
    #[arg(short, long, env = "JSON_FORM_COOKIE")]
    pub cookie: Option<String>,

    /// Print the request body and debug logs
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
