//! External links shown on every page.

use crate::i18n::Localized;

/// Demo booking pages. Override with `[site.booking]`.
pub static BOOKING_LINKS: Localized<&str> = Localized::new(
    "https://cal.com/jlee-heimdex/하임덱스-데모",
    "https://cal.com/jlee-heimdex/heimdex-demo",
);
