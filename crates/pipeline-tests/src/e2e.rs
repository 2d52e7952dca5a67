#[cfg(test)]
mod tests {
    use crate::utils::{
        SALES_CSV, SALES_CSV_NO_QUANTITY, read_csv_lines, seed_northwind, write_sales_csv,
    };
    use runtime::{
        error::PipelineError,
        executor::{self, RunOptions, SourceKind},
    };
    use tempfile::tempdir;
    use transform::error::TransformError;

    fn csv_options(dir: &std::path::Path, contents: &str) -> RunOptions {
        RunOptions {
            source: SourceKind::Csv,
            input: write_sales_csv(dir, contents),
            output_dir: dir.join("processed"),
            limit: None,
        }
    }

    // Full CSV run: two of five rows survive (one duplicate, one negative
    // quantity, one missing order date) and every artifact is written.
    #[test]
    fn csv_run_writes_all_artifacts() {
        let dir = tempdir().expect("temp dir");
        let options = csv_options(dir.path(), SALES_CSV);

        let stats = executor::run(&options).expect("pipeline run");
        assert_eq!(stats.rows_read, 5);
        assert_eq!(stats.rows_retained, 2);
        assert_eq!(stats.rows_dropped, 3);

        let out = &options.output_dir;
        for artifact in [
            "sales_enriched.csv",
            "quality_report.json",
            "revenue_by_month.csv",
            "revenue_by_category.csv",
            "delivery_performance.csv",
        ] {
            assert!(out.join(artifact).is_file(), "missing {artifact}");
        }
        assert!(!out.join(".staging").exists());

        let enriched = read_csv_lines(&out.join("sales_enriched.csv"));
        assert_eq!(enriched.len(), 3); // header + 2 retained rows
        assert!(enriched[0].starts_with("order_id,"));
        assert!(enriched[0].ends_with(",revenue_per_unit"));
        assert!(enriched[1].starts_with("1,ALFKI,10,"));
        assert!(enriched[2].starts_with("2,ANATR,20,"));
    }

    #[test]
    fn csv_run_quality_report_counts() {
        let dir = tempdir().expect("temp dir");
        let options = csv_options(dir.path(), SALES_CSV);
        executor::run(&options).expect("pipeline run");

        let json: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(options.output_dir.join("quality_report.json"))
                .expect("report file"),
        )
        .expect("report json");

        assert_eq!(json["rows_read"], 5);
        assert_eq!(json["rows_retained"], 2);
        assert_eq!(json["dropped_duplicate"], 1);
        assert_eq!(json["dropped_invalid_range"], 1);
        assert_eq!(json["dropped_missing_required_field"], 1);
        // The unshipped row is the only retained one with nulls.
        assert_eq!(json["null_counts"]["shipped_date"], 1);
        assert_eq!(json["null_counts"]["delivery_speed"], 1);
    }

    #[test]
    fn csv_run_summary_views() {
        let dir = tempdir().expect("temp dir");
        let options = csv_options(dir.path(), SALES_CSV);
        executor::run(&options).expect("pipeline run");

        let monthly = read_csv_lines(&options.output_dir.join("revenue_by_month.csv"));
        assert_eq!(monthly[0], "year_month,orders,units,revenue");
        assert_eq!(monthly[1], "2023-01,1,5,45.00");
        assert_eq!(monthly[2], "2023-02,1,3,13.50");

        let categories = read_csv_lines(&options.output_dir.join("revenue_by_category.csv"));
        assert_eq!(categories[1], "Beverages,1,5,45.00");
        assert_eq!(categories[2], "Produce,1,3,13.50");

        let delivery = read_csv_lines(&options.output_dir.join("delivery_performance.csv"));
        assert_eq!(delivery[1], "Fast,1,7.0");
        assert_eq!(delivery[2], "Not Shipped,1,");
    }

    #[test]
    fn sqlite_run_extracts_and_enriches() {
        let dir = tempdir().expect("temp dir");
        let db_path = dir.path().join("northwind.db");
        seed_northwind(&db_path);

        let options = RunOptions {
            source: SourceKind::Sqlite,
            input: db_path,
            output_dir: dir.path().join("processed"),
            limit: None,
        };

        let stats = executor::run(&options).expect("pipeline run");
        assert_eq!(stats.rows_read, 4);
        assert_eq!(stats.rows_retained, 2);

        let enriched = read_csv_lines(&options.output_dir.join("sales_enriched.csv"));
        assert_eq!(enriched.len(), 3);
        // order 1 / product 10: Monday order, shipped in a week.
        assert!(enriched[1].contains(",January,2023-01,Monday,"));
        assert!(enriched[1].contains(",7,Fast,"));
    }

    #[test]
    fn missing_quantity_column_aborts_without_artifacts() {
        let dir = tempdir().expect("temp dir");
        let options = csv_options(dir.path(), SALES_CSV_NO_QUANTITY);

        let result = executor::run(&options);
        assert!(matches!(
            result,
            Err(PipelineError::Transform(TransformError::Schema(_)))
        ));
        assert!(
            !options.output_dir.join("sales_enriched.csv").exists(),
            "a fatal run must not leave output behind"
        );
        assert!(!options.output_dir.join("quality_report.json").exists());
    }

    #[test]
    fn quality_counts_are_stable_under_row_shuffling() {
        let dir = tempdir().expect("temp dir");

        let mut lines: Vec<&str> = SALES_CSV.lines().collect();
        let header = lines.remove(0);
        lines.reverse();
        let reversed = format!("{header}\n{}\n", lines.join("\n"));

        let forward = executor::quality(&csv_options(dir.path(), SALES_CSV)).expect("quality");
        let backward = executor::quality(&csv_options(dir.path(), &reversed)).expect("quality");

        assert_eq!(forward, backward);
        assert!(forward.is_balanced());
    }

    #[test]
    fn limit_runs_a_sample_of_the_extract() {
        let dir = tempdir().expect("temp dir");
        let mut options = csv_options(dir.path(), SALES_CSV);
        options.limit = Some(2);

        let stats = executor::run(&options).expect("pipeline run");
        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.rows_retained, 1); // first row plus its duplicate
    }
}
