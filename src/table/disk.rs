use super::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

/// for types that can be written to
/// and loaded from disk.
pub trait Disk: Sized {
    /// Returns the name of the entity, used in log and error messages
    fn name() -> String;
    /// serialize into any writer
    fn write<W: Write>(&self, writer: W) -> anyhow::Result<()>;
    /// deserialize from any reader
    fn read<R: Read>(reader: R) -> anyhow::Result<Self>;
    /// check if file exists on disk
    fn done(path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }
    /// write to disk
    fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("create {} at {}", Self::name(), path.display()))?;
        let ref mut writer = BufWriter::new(file);
        self.write(&mut *writer)?;
        writer
            .flush()
            .with_context(|| format!("flush {}", path.display()))?;
        log::info!("saved {} to {}", Self::name(), path.display());
        Ok(())
    }
    /// read from disk
    fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open {} at {}", Self::name(), path.display()))?;
        let loaded = Self::read(BufReader::new(file))
            .with_context(|| format!("read {} from {}", Self::name(), path.display()))?;
        log::info!("loaded {} from {}", Self::name(), path.display());
        Ok(loaded)
    }
}

/// One persisted action value.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    heaps: Heaps,
    take: Take,
    value: Utility,
}

/// On-disk layout of a [`Table`].
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    entries: Vec<Record>,
}

impl From<&Table> for Snapshot {
    fn from(table: &Table) -> Self {
        Self {
            entries: table
                .iter()
                .map(|(heaps, take, value)| Record {
                    heaps: heaps.clone(),
                    take: *take,
                    value,
                })
                .collect(),
        }
    }
}

impl TryFrom<Snapshot> for Table {
    type Error = anyhow::Error;
    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        anyhow::ensure!(!snapshot.entries.is_empty(), "table has no entries");
        let arity = snapshot.entries.first().map(|r| r.heaps.len());
        for (i, record) in snapshot.entries.iter().enumerate() {
            anyhow::ensure!(
                Some(record.heaps.len()) == arity,
                "entry {} has {} heaps, expected {}",
                i,
                record.heaps.len(),
                arity.unwrap_or_default()
            );
            anyhow::ensure!(
                record.value.is_finite(),
                "entry {} has non-finite value {}",
                i,
                record.value
            );
            record
                .heaps
                .legal(record.take.heap(), record.take.amount())
                .with_context(|| format!("entry {} on {}", i, record.heaps))?;
        }
        Ok(snapshot
            .entries
            .into_iter()
            .map(|r| (r.heaps, r.take, r.value))
            .collect())
    }
}

impl Disk for Table {
    fn name() -> String {
        String::from("nim")
    }
    fn write<W: Write>(&self, writer: W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(writer, &Snapshot::from(self)).context("serialize table")
    }
    fn read<R: Read>(reader: R) -> anyhow::Result<Self> {
        serde_json::from_reader::<_, Snapshot>(reader)
            .context("deserialize table")?
            .try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn arbitrary(seed: u64) -> Table {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut table = Table::default();
        for _ in 0..64 {
            let heaps = Heaps::sample(HEAP_COUNT, MAX_HEAP_SIZE, rng);
            for take in heaps.choices() {
                if rng.random_bool(0.5) {
                    table.insert(heaps.clone(), take, rng.random_range(-1.0..1.0));
                }
            }
        }
        table
    }

    #[test]
    fn roundtrip_in_memory() {
        let table = arbitrary(42);
        assert!(!table.is_empty());
        let mut buffer = Vec::new();
        table.write(&mut buffer).unwrap();
        let loaded = Table::read(buffer.as_slice()).unwrap();
        assert_eq!(loaded, table);
        for (heaps, take, value) in table.iter() {
            assert_eq!(loaded.value(heaps, take).to_bits(), value.to_bits());
        }
    }

    #[test]
    fn roundtrip_on_disk() {
        let table = arbitrary(7);
        let path = std::env::temp_dir().join(format!("nimbot-{}.json", std::process::id()));
        table.save(&path).unwrap();
        assert!(Table::done(&path));
        let loaded = Table::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("nimbot-does-not-exist.json");
        assert!(!Table::done(&path));
        assert!(Table::load(&path).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Table::read(&b"{\"entries\": [ {"[..]).is_err());
        assert!(Table::read(&b"not json"[..]).is_err());
    }

    #[test]
    fn empty_table_is_an_error() {
        assert!(Table::read(&br#"{"entries":[]}"#[..]).is_err());
        let mut buffer = Vec::new();
        Table::default().write(&mut buffer).unwrap();
        assert!(Table::read(buffer.as_slice()).is_err());
    }

    #[test]
    fn illegal_take_is_an_error() {
        let json = r#"{"entries":[{"heaps":[1,2],"take":{"heap":0,"amount":2},"value":0.5}]}"#;
        assert!(Table::read(json.as_bytes()).is_err());
    }

    #[test]
    fn mixed_heap_counts_are_an_error() {
        let json = r#"{"entries":[
            {"heaps":[1,2],"take":{"heap":0,"amount":1},"value":0.5},
            {"heaps":[1,2,3],"take":{"heap":0,"amount":1},"value":0.5}
        ]}"#;
        assert!(Table::read(json.as_bytes()).is_err());
    }
}
