use clap::Parser;
use soapbox::{
    comments_path, handle_board_commands, load_policy, Cli, CommentBoard, CommentError,
    JsonFileStore,
};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_failure(&cli, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let policy = load_policy()?;
    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => comments_path()?,
    };
    let board = CommentBoard::with_policy(JsonFileStore::new(store_path), policy.general);
    handle_board_commands(cli, &board)
}

fn report_failure(cli: &Cli, err: &anyhow::Error) {
    if !cli.json {
        eprintln!("error: {:#}", err);
        return;
    }
    let mut error = serde_json::json!({
        "code": "INTERNAL",
        "message": format!("{:#}", err),
    });
    if let Some(domain_err) = err.downcast_ref::<CommentError>() {
        error["code"] = serde_json::json!(domain_err.code());
        if let CommentError::Validation { violations } = domain_err {
            error["violations"] = serde_json::json!(violations);
        }
    }
    let envelope = serde_json::json!({ "ok": false, "error": error });
    match serde_json::to_string_pretty(&envelope) {
        Ok(out) => println!("{}", out),
        Err(_) => eprintln!("error: {:#}", err),
    }
}
