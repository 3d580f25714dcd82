use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;

use crate::types::Product;

/// Collator for the storefront's locale. Default (tertiary) strength keeps
/// case and accent distinctions.
fn spanish_collator() -> CollatorBorrowed<'static> {
    Collator::try_new(locale!("es").into(), CollatorOptions::default())
        .expect("es collation data is compiled in")
}

/// Sorts products by title using Spanish collation.
///
/// Byte order would sort every accented title after 'Z'. The sort is
/// stable, so equal titles keep their load order.
pub fn sort_by_title(products: &mut [Product]) {
    let collator = spanish_collator();
    products.sort_by(|a, b| collator.compare(&a.title, &b.title));
}
