use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// (site, share of launches, base success probability)
const SITES: [(&str, f64, f64); 4] = [
    ("CCAFS LC-40", 0.46, 0.55),
    ("VAFB SLC-4E", 0.18, 0.60),
    ("KSC LC-39A", 0.23, 0.80),
    ("CCAFS SLC-40", 0.13, 0.45),
];

const N_LAUNCHES: usize = 56;
const MAX_PAYLOAD: f64 = 9600.0;

#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "Flight Number")]
    flight_number: i64,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn pick_site(rng: &mut SimpleRng) -> (&'static str, f64) {
    let mut roll = rng.next_f64();
    for (site, share, p_success) in SITES {
        if roll < share {
            return (site, p_success);
        }
        roll -= share;
    }
    let (site, _, p_success) = SITES[SITES.len() - 1];
    (site, p_success)
}

fn generate(rng: &mut SimpleRng) -> Vec<Row> {
    (0..N_LAUNCHES)
        .map(|i| {
            let (launch_site, p_success) = pick_site(rng);
            // Payloads in whole 100 kg units, biased light.
            let payload = (rng.next_f64().powf(1.4) * MAX_PAYLOAD / 100.0).round() * 100.0;
            // Later flights succeed more often.
            let experience = i as f64 / N_LAUNCHES as f64;
            let success = rng.next_f64() < (p_success + 0.3 * experience).min(0.95);
            Row {
                flight_number: i as i64 + 1,
                launch_site,
                class: i64::from(success),
                payload_mass_kg: payload,
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.flight_number))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.launch_site))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload_mass_kg))),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing Parquet batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng);

    write_csv(&rows, "spacex_launch_dash.csv")?;
    write_parquet(&rows, "spacex_launch_dash.parquet")?;

    let successes = rows.iter().filter(|r| r.class == 1).count();
    println!(
        "Wrote {} launches ({successes} successful) to spacex_launch_dash.csv and .parquet",
        rows.len()
    );
    Ok(())
}
