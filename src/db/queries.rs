// Database queries — reads and writes for the slot table.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Slot, SlotEntry};

/// Get a slot's value, if one is stored.
pub fn get_slot(conn: &Connection, slot: Slot) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM slots WHERE key = ?1")?;
    let result = stmt
        .query_row(params![slot.key()], |row| row.get(0))
        .optional()?;
    Ok(result)
}

/// Get a slot's value with its last update time.
pub fn get_slot_entry(conn: &Connection, slot: Slot) -> Result<Option<SlotEntry>> {
    let mut stmt = conn.prepare("SELECT value, updated_at FROM slots WHERE key = ?1")?;
    let result = stmt
        .query_row(params![slot.key()], |row| {
            Ok(SlotEntry {
                slot,
                value: row.get(0)?,
                updated_at: row.get(1)?,
            })
        })
        .optional()?;
    Ok(result)
}

/// Set a slot's value (upsert). The previous value is replaced.
pub fn set_slot(conn: &Connection, slot: Slot, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO slots (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![slot.key(), value],
    )?;
    Ok(())
}

/// Remove a slot's value. Clearing an empty slot is not an error.
pub fn clear_slot(conn: &Connection, slot: Slot) -> Result<()> {
    conn.execute("DELETE FROM slots WHERE key = ?1", params![slot.key()])?;
    Ok(())
}

/// Every stored slot, in `Slot::ALL` order.
pub fn get_all_slots(conn: &Connection) -> Result<Vec<SlotEntry>> {
    let mut entries = Vec::new();
    for slot in Slot::ALL {
        if let Some(entry) = get_slot_entry(conn, slot)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}
