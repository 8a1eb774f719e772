#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::libs::template::{day_count, month_range, render, write_new};

    struct TemplateTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TemplateTestContext {
        fn setup() -> Self {
            TemplateTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_range() {
        assert_eq!(month_range("2025-03").unwrap(), (date(2025, 3, 1), date(2025, 3, 31)));
        assert_eq!(month_range("2025-02").unwrap(), (date(2025, 2, 1), date(2025, 2, 28)));
        assert_eq!(month_range("2024-02").unwrap(), (date(2024, 2, 1), date(2024, 2, 29)));
        assert_eq!(month_range("2024-12").unwrap(), (date(2024, 12, 1), date(2024, 12, 31)));
    }

    #[test]
    fn test_month_range_rejects_malformed_input() {
        for arg in ["2025", "2025-13", "03-2025", "march"] {
            let err = month_range(arg).unwrap_err();
            assert!(err.to_string().contains("Invalid month"), "unexpected error for {}: {}", arg, err);
        }
    }

    #[test]
    fn test_render_lists_working_days_in_order() {
        let (first, last) = month_range("2025-03").unwrap();
        let working_days: HashSet<NaiveDate> = [date(2025, 3, 4), date(2025, 3, 3), date(2025, 3, 5)].into_iter().collect();

        let content = render("2025-03", first, last, &working_days);

        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty() && !l.starts_with('#')).collect();
        assert_eq!(lines, vec!["2025-03-03 8.0", "2025-03-04 8.0", "2025-03-05 8.0"]);
        assert_eq!(day_count(&content), 3);
    }

    #[test]
    fn test_render_documents_the_grammar() {
        let (first, last) = month_range("2025-03").unwrap();
        let content = render("2025-03", first, last, &HashSet::new());

        assert!(content.starts_with("# Work schedule for 2025-03"));
        assert!(content.contains("<date> <hours> <ticket-or-keyword>"));
        assert!(content.contains("exactly 8 hours"));
    }

    #[test]
    fn test_day_count_skips_indented_comments() {
        // Hand-edited templates may indent comment lines; they classify
        // like blank lines, not like working days.
        let content = "# header\n  # indented note\n\n2025-03-03 8.0\n  2025-03-04 8.0\n";
        assert_eq!(day_count(content), 2);
    }

    #[test]
    fn test_render_ignores_days_outside_the_month() {
        let (first, last) = month_range("2025-03").unwrap();
        let working_days: HashSet<NaiveDate> = [date(2025, 2, 28), date(2025, 3, 3), date(2025, 4, 1)].into_iter().collect();

        let content = render("2025-03", first, last, &working_days);
        assert_eq!(day_count(&content), 1);
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_write_new_creates_file(ctx: &mut TemplateTestContext) {
        let path = ctx.temp_dir.path().join("2025-03.jira");
        write_new(&path, "# header\n2025-03-03 8.0\n").unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# header\n2025-03-03 8.0\n");
    }

    #[test_context(TemplateTestContext)]
    #[test]
    fn test_write_new_never_overwrites(ctx: &mut TemplateTestContext) {
        let path = ctx.temp_dir.path().join("2025-03.jira");
        fs::write(&path, "original content").unwrap();

        let err = write_new(&path, "new content").unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"), "unexpected error: {}", err);

        // The original file is untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), "original content");
    }
}
