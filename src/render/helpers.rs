//! @acp:module "Template Helpers"
//! @acp:summary "Handlebars helpers shared by the variant templates"
//! @acp:domain cli
//! @acp:layer output

use chrono::NaiveDate;
use handlebars::{handlebars_helper, Handlebars};

handlebars_helper!(initials: |name: str| initials_of(name));

handlebars_helper!(join: |items: array, sep: str| {
    items
        .iter()
        .map(|item| match item.as_str() {
            Some(s) => s.to_string(),
            None => item.to_string(),
        })
        .collect::<Vec<_>>()
        .join(sep)
});

handlebars_helper!(upper: |s: str| s.to_uppercase());

handlebars_helper!(month_year: |date: str| format_date(date, "%b %Y"));

handlebars_helper!(long_date: |date: str| format_date(date, "%b %-d, %Y"));

handlebars_helper!(seq: |index: u64| format!("{:04}", index + 1));

/// Register every helper on a registry
pub fn register(hb: &mut Handlebars<'_>) {
    hb.register_helper("initials", Box::new(initials));
    hb.register_helper("join", Box::new(join));
    hb.register_helper("upper", Box::new(upper));
    hb.register_helper("month_year", Box::new(month_year));
    hb.register_helper("long_date", Box::new(long_date));
    hb.register_helper("seq", Box::new(seq));
}

/// First letter of each word: "George Nurijanian" -> "GN"
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Reformat an ISO date; unparseable input is shown as-is
pub fn format_date(date: &str, format: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format(format).to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut hb = Handlebars::new();
        register(&mut hb);
        hb
    }

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("George Nurijanian"), "GN");
        assert_eq!(initials_of("  ada   lovelace byron "), "alb");
        assert_eq!(initials_of(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-05-29", "%b %Y"), "May 2023");
        assert_eq!(format_date("2026-01-09", "%b %-d, %Y"), "Jan 9, 2026");
        assert_eq!(format_date("soon", "%b %Y"), "soon");
    }

    #[test]
    fn test_helpers_in_templates() {
        let hb = registry();
        let data = json!({"name": "George Nurijanian", "tags": ["AI", "ADHD"], "date": "2021-10-11"});

        assert_eq!(hb.render_template("{{initials name}}", &data).unwrap(), "GN");
        assert_eq!(hb.render_template("{{join tags \", \"}}", &data).unwrap(), "AI, ADHD");
        assert_eq!(hb.render_template("{{upper \"about\"}}", &data).unwrap(), "ABOUT");
        assert_eq!(hb.render_template("{{month_year date}}", &data).unwrap(), "Oct 2021");
        assert_eq!(
            hb.render_template("{{#each tags}}{{seq @index}} {{/each}}", &data).unwrap(),
            "0001 0002 "
        );
    }
}
