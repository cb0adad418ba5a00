use crate::error::Result;
use crate::group::Grouping;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Row<'a> {
    categorie: &'a str,
    vak: &'a str,
    onderwerp: &'a str,
    url: &'a str,
    prijs: &'a str,
    taal: &'a str,
    platform: &'a str,
}

/// Flattens the grouping back into one row per entry, in page order.
pub fn write_csv<W: Write>(grouping: &Grouping, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (categorie, subjects) in grouping.categories() {
        for (vak, entries) in subjects {
            for entry in entries {
                csv_writer.serialize(Row {
                    categorie,
                    vak,
                    onderwerp: &entry.onderwerp,
                    url: &entry.url,
                    prijs: &entry.prijs,
                    taal: &entry.taal,
                    platform: &entry.platform,
                })?;
            }
        }
    }
    csv_writer.flush()?;
    Ok(())
}
