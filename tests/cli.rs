mod cli {
    #![allow(non_snake_case)]

    use mockito::Server;
    use predicates::str::contains;

    use assert_cmd::Command;
    use std::io::Write;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "deadlink";

    fn write_config(dir: &std::path::Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_check__empty_stdin_succeeds() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg("check").write_stdin("");

        cmd.assert().success();
        Ok(())
    }

    #[tokio::test]
    async fn test_check__alive_url_succeeds() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create();
        let endpoint = server.url() + "/200";

        let dir = tempfile::tempdir()?;
        let config = write_config(dir.path(), "http_method = \"get\"\n");
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(endpoint.as_bytes())?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("check")
            .arg("--config")
            .arg(&config)
            .write_stdin(format!("{}\n", file.path().display()));

        cmd.assert().success();
        Ok(())
    }

    #[tokio::test]
    async fn test_check__dead_url_fails_and_names_file() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create();
        let endpoint = server.url() + "/404";

        let dir = tempfile::tempdir()?;
        let config = write_config(dir.path(), "http_method = \"get\"\n");
        let mut file = tempfile::NamedTempFile::new()?;
        let file_name = file.path().display().to_string();
        file.write_all(endpoint.as_bytes())?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("check")
            .arg("--config")
            .arg(&config)
            .write_stdin(format!("{}\n", file.path().display()));

        cmd.assert().failure();
        cmd.assert()
            .failure()
            .stderr(contains(format!("{endpoint} is dead (404)")));
        cmd.assert().failure().stderr(contains(&file_name));
        cmd.assert()
            .failure()
            .stderr(contains("1 of 1 checked urls are dead"));
        Ok(())
    }

    #[tokio::test]
    async fn test_check__url_in_two_files_reports_both() -> TestResult {
        let mut server = Server::new_async().await;
        let _m500 = server.mock("GET", "/500").with_status(500).create();
        let endpoint = server.url() + "/500";

        let dir = tempfile::tempdir()?;
        let config = write_config(dir.path(), "http_method = \"get\"\n");
        let mut file_a = tempfile::NamedTempFile::new()?;
        let mut file_b = tempfile::NamedTempFile::new()?;
        file_a.write_all(endpoint.as_bytes())?;
        file_b.write_all(endpoint.as_bytes())?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("check").arg("--config").arg(&config).write_stdin(format!(
            "{}\n{}\n",
            file_a.path().display(),
            file_b.path().display()
        ));

        cmd.assert().failure();
        cmd.assert()
            .failure()
            .stderr(contains(file_a.path().display().to_string()));
        cmd.assert()
            .failure()
            .stderr(contains(file_b.path().display().to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn test_check__exhausted_budget_aborts_early() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create();
        let endpoint = server.url() + "/404";

        let dir = tempfile::tempdir()?;
        let config = write_config(
            dir.path(),
            "http_method = \"get\"\nmax_failed_request_count = 0\n",
        );
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(endpoint.as_bytes())?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("check")
            .arg("--config")
            .arg(&config)
            .write_stdin(format!("{}\n", file.path().display()));

        cmd.assert()
            .failure()
            .stderr(contains("too many urls are dead"));
        Ok(())
    }

    #[tokio::test]
    async fn test_check__ignored_url_is_not_checked() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server.mock("GET", "/404").with_status(404).create();
        let endpoint = server.url() + "/404";

        let dir = tempfile::tempdir()?;
        let config = write_config(
            dir.path(),
            &format!("http_method = \"get\"\nignore_urls = [\"{endpoint}\"]\n"),
        );
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(endpoint.as_bytes())?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("check")
            .arg("--config")
            .arg(&config)
            .write_stdin(format!("{}\n", file.path().display()));

        cmd.assert().success();
        Ok(())
    }

    #[test]
    fn test_check__missing_config_file_fails() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("check")
            .arg("--config")
            .arg("definitely-missing.toml")
            .write_stdin("");

        cmd.assert()
            .failure()
            .stderr(contains("Configuration error"));
        Ok(())
    }

    #[test]
    fn test_init__creates_config_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).arg("init");
        cmd.assert().success();

        let content = std::fs::read_to_string(dir.path().join(".deadlink.toml"))?;
        assert!(content.contains("http_method"));

        // Second run must leave the file untouched
        std::fs::write(dir.path().join(".deadlink.toml"), "timeout = 1\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(dir.path()).arg("init");
        cmd.assert().success();
        let content = std::fs::read_to_string(dir.path().join(".deadlink.toml"))?;
        assert_eq!(content, "timeout = 1\n");
        Ok(())
    }

    #[test]
    fn test_no_sub_command_is_an_error() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.assert().failure();
        Ok(())
    }
}
