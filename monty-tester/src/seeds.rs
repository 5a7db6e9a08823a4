use anyhow::{Result, bail};
use std::collections::HashSet;

/// Resolve a list of CLI seed arguments into run seeds.
///
/// Supports literal integers (negative values use their magnitude) and the
/// keywords `random` / `entropy`, which request an unseeded run (`None`).
/// Duplicates are dropped, keeping first-seen order.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<Option<u64>>> {
    let mut resolved: Vec<Option<u64>> = Vec::new();
    let mut seen: HashSet<Option<u64>> = HashSet::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }

        let seed = if token.eq_ignore_ascii_case("random") || token.eq_ignore_ascii_case("entropy")
        {
            None
        } else if let Ok(value) = token.parse::<i64>() {
            Some(value.unsigned_abs())
        } else if let Ok(value) = token.parse::<u64>() {
            Some(value)
        } else {
            bail!("Unrecognized seed token: {token}");
        };

        if seen.insert(seed) {
            resolved.push(seed);
        }
    }

    if resolved.is_empty() {
        resolved.push(None);
    }

    Ok(resolved)
}
