mod platform;

use picker_core::FinishOutcome;
use serde::Serialize;

#[derive(Serialize)]
struct SelectionRecord {
    id: u64,
    name: String,
}

fn main() -> anyhow::Result<()> {
    match platform::run_app()? {
        FinishOutcome::Confirmed(selection) => {
            let records: Vec<SelectionRecord> = selection
                .into_iter()
                .map(|selected| SelectionRecord {
                    id: selected.id,
                    name: selected.name,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        FinishOutcome::Cancelled => {}
    }
    Ok(())
}
