//! Cross-check of the catalog against the compatibility matrices.

use std::sync::OnceLock;

use crate::error::CatalogError;
use crate::gana::{ALL_GANAS, GANA_MATRIX};
use crate::graha::Graha;
use crate::maitri::GRAHA_MAITRI;
use crate::nakshatra::NAKSHATRA_CATALOG;
use crate::rashi::RASHI_CATALOG;
use crate::yoni::{YONI_MATRIX, Yoni};

static CATALOG_CHECK: OnceLock<Result<(), CatalogError>> = OnceLock::new();

/// Verify that every class pair the catalog can produce has a cell in the
/// yoni, gana and graha maitri matrices.
pub fn verify_catalog() -> Result<(), CatalogError> {
    let mut yonis: Vec<Yoni> = Vec::new();
    for rec in &NAKSHATRA_CATALOG {
        if !yonis.contains(&rec.yoni) {
            yonis.push(rec.yoni);
        }
    }
    YONI_MATRIX.check_complete(&yonis)?;
    GANA_MATRIX.check_complete(&ALL_GANAS)?;

    let mut lords: Vec<Graha> = Vec::new();
    let rashi_lords = RASHI_CATALOG.iter().map(|r| r.lord);
    let nakshatra_lords = NAKSHATRA_CATALOG.iter().map(|n| n.lord);
    for lord in rashi_lords.chain(nakshatra_lords) {
        if !lords.contains(&lord) {
            lords.push(lord);
        }
    }
    GRAHA_MAITRI.check_complete(&lords)?;

    tracing::debug!(
        yonis = yonis.len(),
        lords = lords.len(),
        "catalog matrices verified"
    );
    Ok(())
}

/// Run [`verify_catalog`] once per process and return the cached outcome.
pub fn ensure_catalog() -> Result<(), CatalogError> {
    CATALOG_CHECK.get_or_init(verify_catalog).clone()
}
