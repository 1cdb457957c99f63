use std::io::{self, BufRead, Write};

use anyhow::Result;
use mysql::{Params, Value};

use crate::app::AppContext;
use crate::db::QueryOutcome;

const RULE: &str = "----------";

/// Interactive query executor. Reads one statement per line from stdin and
/// prints rows, an affected-row count, or a failure notice. An empty line
/// (or EOF) exits. Operator tooling only.
pub(crate) fn run(app: &mut AppContext) -> Result<()> {
    let db = app.db_mut();
    db.connect()?;
    println!("--- Interactive Query Executor ---");

    let stdin = io::stdin();
    loop {
        print!("Enter SQL query (or press ENTER to exit): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        println!("{RULE}");
        match db.execute_query(query, Params::Empty) {
            Ok(QueryOutcome::Rows(rows)) if rows.is_empty() => {
                println!("Query executed successfully, no results to display.");
            }
            Ok(QueryOutcome::Rows(rows)) => {
                for row in rows {
                    println!("{}", render_row(&row));
                }
            }
            Ok(QueryOutcome::Affected(count)) => {
                println!("Query executed successfully. Affected rows: {count}");
            }
            Err(err) => println!("Query failed: {err}"),
        }
        println!("{RULE}");
    }

    db.disconnect();
    Ok(())
}

fn render_row(row: &[(String, Value)]) -> String {
    let fields: Vec<String> = row
        .iter()
        .map(|(name, value)| format!("{name}: {}", value.as_sql(false)))
        .collect();
    format!("{{{}}}", fields.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_in_column_order() {
        let row = vec![
            ("id".to_string(), Value::Int(7)),
            ("caption".to_string(), Value::Bytes(b"Hello".to_vec())),
            ("embed_code".to_string(), Value::NULL),
        ];
        assert_eq!(render_row(&row), "{id: 7, caption: 'Hello', embed_code: NULL}");
    }
}
