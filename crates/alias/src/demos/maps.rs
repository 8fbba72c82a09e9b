use crate::{say, Transcript};
use alias_val::{GeoVertex, Map, ValResult, ValStr};
use tracing::debug;

pub fn maps(out: &mut Transcript) -> ValResult<()> {
    let mut m: Map<ValStr, GeoVertex> = Map::nil();
    debug!(nil = m.is_nil(), len = m.len(), "declared map");

    m = Map::make();
    m.insert("Bell Labs".into(), GeoVertex::new(40.68433, -74.39967))?;
    say!(out, m.get("Bell Labs"));

    // Keys are required in a map literal.
    let m2: Map<ValStr, GeoVertex> = Map::from([
        ("Bell Labs".into(), GeoVertex::new(40.68433, -74.39967)),
        ("Google".into(), GeoVertex::new(37.42202, -122.08408)),
    ]);
    say!(out, m2);

    let m3: Map<ValStr, i64> = Map::make();

    m3.insert("Answer".into(), 42)?;
    say!(out, "The value:", m3.get("Answer"));

    m3.insert("Answer".into(), 48)?;
    say!(out, "The value:", m3.get("Answer"));

    m3.remove("Answer");
    say!(out, "The value:", m3.get("Answer"));

    let (v, ok) = m3.lookup("Answer");
    say!(out, "The value:", v, "Present?", ok);
    Ok(())
}

pub fn word_count(out: &mut Transcript) -> ValResult<()> {
    let counts = alias_val::word_count("I ate a donut. Then I ate another donut.")?;
    say!(out, counts);
    Ok(())
}

/// Reads are fine on a nil map; the write faults.
pub fn nil_map_write(out: &mut Transcript) -> ValResult<()> {
    let m: Map<ValStr, i64> = Map::nil();
    let (v, ok) = m.lookup("Answer");
    out.line(format!("reading a nil map: {} present: {}", v, ok));

    m.insert("Answer".into(), 42)?;
    say!(out, "unreachable:", m.get("Answer"));
    Ok(())
}
