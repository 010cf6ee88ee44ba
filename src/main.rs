use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use wenyan_registry::index::{build_index, index_json, write_index};
use wenyan_registry::model::PackageDeclaration;
use wenyan_registry::readme::{render_package_list, update_readme};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build the package index and README package listing", long_about = None)]
struct Cli {
    /// JSON array of package declarations
    #[arg(value_name = "PACKAGES_FILE", default_value = "registry-packages.json")]
    packages_file: String,

    /// Directory receiving index.json
    #[arg(long, default_value = "dist")]
    dist_dir: String,

    /// README to patch between the package-list markers
    #[arg(long, default_value = "README.md")]
    readme: String,

    /// Compute and print both outputs without writing any file
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let packages_path = Utf8PathBuf::from(&cli.packages_file);
    let raw = std::fs::read_to_string(packages_path.as_std_path())
        .with_context(|| format!("Failed to read {}", packages_path))?;
    let packages: Vec<PackageDeclaration> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", packages_path))?;

    // Validation happens before either file is touched.
    let index = build_index(&packages)
        .with_context(|| format!("Invalid declarations in {}", packages_path))?;

    if cli.dry_run {
        print!("{}", index_json(&index)?);
        print!("{}", render_package_list(&packages)?);
        return Ok(());
    }

    let dist_dir = Utf8PathBuf::from(&cli.dist_dir);
    let written = write_index(&index, &dist_dir)?;
    println!("wrote {}", written);

    let readme_path = Utf8PathBuf::from(&cli.readme);
    update_readme(&readme_path, &packages)?;
    println!("updated {}", readme_path);

    Ok(())
}
