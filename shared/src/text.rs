//! Text helpers shared by the models and the pages

/// Capitalise the first letter of every word and lowercase the rest.
///
/// A "word" starts at any alphabetic character that follows a
/// non-alphabetic one, so `"old trafford"` becomes `"Old Trafford"` and
/// `"o'neill"` becomes `"O'Neill"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_is_letter = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
