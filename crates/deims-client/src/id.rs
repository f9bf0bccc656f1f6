// DEIMS identifier normalization.
//
// A DEIMS.ID circulates in several textual forms: the full resource URL
// (`https://deims.org/<uuid>`), a host-prefixed form (`deims.org/<uuid>`),
// a compact scheme form (`deims:<uuid>`), and the bare suffix. All lookup
// endpoints take the bare suffix, so everything funnels through here first.

use crate::error::Error;

/// Reduce any accepted DEIMS.ID form to the bare identifier suffix.
///
/// Takes the substring after the final path separator, then the substring
/// after the final colon within that. Identifiers are case-sensitive; no
/// case folding is applied. Idempotent: a bare identifier is returned
/// unchanged (as a subslice of the input).
///
/// Fails with [`Error::InvalidIdentifier`] when nothing remains after
/// stripping, i.e. the input holds no non-separator characters.
pub fn normalize_site_id(raw: &str) -> Result<&str, Error> {
    let trimmed = raw.trim().trim_end_matches(['/', ':']);

    let tail = match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    };
    let tail = match tail.rfind(':') {
        Some(i) => &tail[i + 1..],
        None => tail,
    };

    if tail.is_empty() {
        return Err(Error::InvalidIdentifier {
            input: raw.to_owned(),
        });
    }
    Ok(tail)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SUFFIX: &str = "8eda49e9-1f4e-4f3e-b58e-e0bb25dc32a6";

    #[test]
    fn accepted_forms_converge() {
        let forms = [
            format!("https://deims.org/{SUFFIX}"),
            format!("http://deims.org/{SUFFIX}"),
            format!("deims.org/{SUFFIX}"),
            format!("deims:{SUFFIX}"),
            SUFFIX.to_owned(),
        ];
        for form in &forms {
            assert_eq!(normalize_site_id(form).unwrap(), SUFFIX, "form: {form}");
        }
    }

    #[test]
    fn idempotent() {
        let once = normalize_site_id("https://deims.org/abc-123").unwrap();
        let twice = normalize_site_id(once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn bare_id_returned_unchanged() {
        assert_eq!(normalize_site_id(SUFFIX).unwrap(), SUFFIX);
    }

    #[test]
    fn trailing_separators_ignored() {
        assert_eq!(
            normalize_site_id(&format!("https://deims.org/{SUFFIX}/")).unwrap(),
            SUFFIX
        );
    }

    #[test]
    fn case_preserved() {
        assert_eq!(normalize_site_id("deims:ABC-def").unwrap(), "ABC-def");
    }

    #[test]
    fn separator_only_input_rejected() {
        for input in ["", "   ", "///", ":::", "/:/:"] {
            assert!(
                matches!(
                    normalize_site_id(input),
                    Err(Error::InvalidIdentifier { .. })
                ),
                "input: {input:?}"
            );
        }
    }
}
