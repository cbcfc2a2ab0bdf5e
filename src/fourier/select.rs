use crate::fourier::dft::Coefficient;

/// Retain the `k` coefficients with the greatest magnitude.
///
/// The result is sorted by descending magnitude; ties keep their input order
/// (the sort is stable). The DC coefficient competes like any other here; it
/// is only filtered from the arm visuals at render time. `k` larger than the
/// input just returns everything.
pub fn select_top_k(coefficients: &[Coefficient], k: usize) -> Vec<Coefficient> {
    let mut ranked = coefficients.to_vec();
    ranked.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/select.rs"]
mod tests;
