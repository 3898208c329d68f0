use crate::*;

pub fn handle_board_commands<S: CommentStore>(
    cli: &Cli,
    board: &CommentBoard<S>,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Post {
            person_key,
            text,
            name,
            timestamp,
        } => {
            let posted = match board.post(person_key, name, text, timestamp.as_deref()) {
                Ok(posted) => posted,
                Err(err) => {
                    audit(
                        "reject",
                        serde_json::json!({"personKey": person_key, "code": err.code()}),
                    );
                    return Err(err.into());
                }
            };
            audit(
                "post",
                serde_json::json!({"personKey": posted.person_key, "id": posted.id}),
            );
            print_one(cli.json, posted, |c| {
                format!("posted {} under {}", c.id, c.person_key)
            })?;
        }
        Commands::List { person_key } => {
            let items = board.comments(person_key)?;
            print_out(cli.json, &items, |c| {
                format!("{}\t{}\t{}", c.timestamp, c.name, c.text)
            })?;
        }
        Commands::All => {
            let threads = board.all_comments()?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &threads
                    })?
                );
            } else {
                for (person_key, comments) in &threads {
                    println!("{}\t{} comments", person_key, comments.len());
                }
            }
        }
        Commands::Count { person_key } => {
            let count = board.comment_count(person_key)?;
            print_one(cli.json, count, |c| format!("{} comments", c))?;
        }
        Commands::Screen { text } => {
            let verdict = filter::check(text);
            print_one(cli.json, verdict, |v| {
                if v.is_clean {
                    "clean".to_string()
                } else {
                    v.violations.join("\n")
                }
            })?;
        }
    }

    Ok(())
}
