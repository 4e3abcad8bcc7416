//! Database schema and seeding

use rusqlite::Connection;

use salesdash_core::model::{default_presets, sample_scenarios};
use salesdash_core::sales::sample_records;

use crate::error::ApiResult;

pub fn init_db(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS scenarios (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            parameters TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS presets (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            parameters TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS salesdata (
            uuid TEXT PRIMARY KEY,
            invoice_number TEXT NOT NULL,
            date TEXT NOT NULL,
            customer TEXT NOT NULL,
            item TEXT NOT NULL,
            quantity TEXT NOT NULL,
            product_revenue TEXT NOT NULL,
            total_revenue TEXT NOT NULL,
            order_category TEXT NOT NULL,
            product_line TEXT NOT NULL,
            first_repeat TEXT NOT NULL,
            online_offline TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

/// Seed empty tables with the built-in samples so no page renders against
/// an empty store.
pub fn seed_db(conn: &Connection) -> ApiResult<()> {
    let now = chrono::Utc::now().to_rfc3339();

    let scenario_count: i64 = conn.query_row("SELECT COUNT(*) FROM scenarios", [], |row| row.get(0))?;
    if scenario_count == 0 {
        for scenario in sample_scenarios() {
            let params_json = serde_json::to_string(&scenario.parameters)?;
            conn.execute(
                "INSERT INTO scenarios (id, name, description, parameters, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    scenario.id,
                    scenario.name,
                    scenario.description,
                    params_json,
                    now,
                    now
                ],
            )?;
        }
        tracing::info!("seeded sample scenarios");
    }

    let preset_count: i64 = conn.query_row("SELECT COUNT(*) FROM presets", [], |row| row.get(0))?;
    if preset_count == 0 {
        for preset in default_presets() {
            let params_json = serde_json::to_string(&preset.parameters)?;
            conn.execute(
                "INSERT INTO presets (id, name, parameters, created_at) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![preset.id, preset.name, params_json, now],
            )?;
        }
        tracing::info!("seeded default presets");
    }

    let sales_count: i64 = conn.query_row("SELECT COUNT(*) FROM salesdata", [], |row| row.get(0))?;
    if sales_count == 0 {
        for record in sample_records() {
            conn.execute(
                "INSERT INTO salesdata (uuid, invoice_number, date, customer, item, quantity, product_revenue, total_revenue, order_category, product_line, first_repeat, online_offline)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                rusqlite::params![
                    record.uuid,
                    record.invoice_number,
                    record.date,
                    record.customer,
                    record.item,
                    record.quantity,
                    record.product_revenue,
                    record.total_revenue,
                    record.order_category,
                    record.product_line,
                    record.first_repeat,
                    record.online_offline
                ],
            )?;
        }
        tracing::info!("seeded sample sales rows");
    }

    Ok(())
}
