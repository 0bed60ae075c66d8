use snapbox::cmd::Command;

const BLOG: &str = "tests/fixtures/blog";

fn siteconf() -> Command {
    Command::new(snapbox::cmd::cargo_bin!("siteconf")).current_dir(BLOG)
}

#[test]
fn check_valid() {
    siteconf()
        .arg("check")
        .assert()
        .success()
        .stdout_eq("")
        .stderr_eq(
            "\
[info]   Configuration is valid
",
        );
}

#[test]
fn check_layered() {
    siteconf()
        .args(["check", "--config", "publish.yml"])
        .assert()
        .success();
}

#[test]
fn check_reports_every_problem() {
    siteconf()
        .args(["check", "--config", "broken.yml"])
        .assert()
        .code(1)
        .stdout_eq(
            "\
site.name: is required
site.url: invalid URL `jonnyreeves.co.uk`: [..]
links.social[1]: invalid URL `twitter.com/jonnyreeves`: [..]
static_files.extra_path_metadata.extra/CNAME: is not listed in `static_files.paths`
pagination.per_page: must be a positive integer, got 0
",
        )
        .stderr_eq(
            "\
error: 5 problem(s) found in configuration
",
        );
}

#[test]
fn check_missing_config() {
    siteconf()
        .args(["check", "--config", "nope.yml"])
        .assert()
        .code(1);
}

#[test]
fn permalink_dated() {
    siteconf()
        .args(["permalink", "Hello, World!", "--date", "2013-03-05"])
        .assert()
        .success()
        .stdout_eq(
            "\
url: 2013/03/hello-world/
save_as: 2013/03/hello-world/index.html
",
        );
}

#[test]
fn permalink_bad_date() {
    siteconf()
        .args(["permalink", "Hello", "--date", "March 5th"])
        .assert()
        .failure();
}

#[test]
fn debug_articles() {
    siteconf()
        .args(["debug", "articles"])
        .assert()
        .success()
        .stdout_eq(
            "\
2013-03-05-hello-world.md -> 2013/03/hello-world/
notes/2014-1-9-rust-notes.markdown -> 2014/01/rust-notes/
",
        );
}

#[test]
fn debug_statics() {
    siteconf()
        .args(["debug", "statics"])
        .assert()
        .success()
        .stdout_eq(
            "\
extra/CNAME -> CNAME
images/avatar.jpg -> images/avatar.jpg
",
        );
}

#[test]
fn debug_site() {
    siteconf()
        .args(["debug", "site", "--config", "publish.yml"])
        .assert()
        .success()
        .stdout_eq(
            "\
...
  \"url\": \"https://jonnyreeves.co.uk\"
}
",
        );
}

#[test]
fn static_copies_into_destination() {
    let dest = tempfile::tempdir().unwrap();
    siteconf()
        .arg("static")
        .arg("--destination")
        .arg(dest.path())
        .assert()
        .success();

    let cname = std::fs::read_to_string(dest.path().join("CNAME")).unwrap();
    assert_eq!(cname.trim(), "jonnyreeves.co.uk");
    assert!(dest.path().join("images/avatar.jpg").is_file());
    assert!(!dest.path().join("extra").exists());
}

#[test]
fn init_then_check() {
    let site = tempfile::tempdir().unwrap();
    Command::new(snapbox::cmd::cargo_bin!("siteconf"))
        .arg("init")
        .arg(site.path())
        .assert()
        .success();
    Command::new(snapbox::cmd::cargo_bin!("siteconf"))
        .arg("check")
        .arg("--config")
        .arg(site.path().join("_siteconf.yml"))
        .assert()
        .success();

    Command::new(snapbox::cmd::cargo_bin!("siteconf"))
        .arg("init")
        .arg(site.path())
        .assert()
        .failure();
}
