use mockfs_kit::{Entry, FsBackend, MockFS};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // seed a tree; missing parents become directories
    let mut fs = MockFS::with_entries([
        ("/docs/first.txt", Entry::from("Hello")),
        ("/docs/drafts", Entry::dir()),
    ]);

    // relative paths follow the simulated cwd
    fs.chdir("docs")?;
    fs.write("second.txt", b"World")?;
    assert!(fs.exists("/docs/second.txt"));

    fs.chdir("/")?;
    let first = fs.read("/docs/first.txt")?;
    let second = fs.read("/docs/second.txt")?;
    println!(
        "{}, {}!",
        String::from_utf8_lossy(first),
        String::from_utf8_lossy(second)
    );

    for path in fs.glob("/docs/*.txt") {
        println!("matched {}", path.display());
    }

    fs.copytree("/docs", "/backup")?;
    for (dir, dirs, files) in fs.walk("/") {
        println!("{}: dirs={dirs:?} files={files:?}", dir.display());
    }

    fs.rmtree("/docs", false, None)?;
    assert!(!fs.exists("/docs"));
    assert!(fs.isfile("/backup/second.txt"));

    Ok(())
}
