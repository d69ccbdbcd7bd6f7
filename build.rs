use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();

    // Scaffold the assets directory so the game can run out of a fresh
    // checkout. The placeholders are not valid images; the renderer
    // falls back to solid-color rectangles when a load fails.
    let assets_dir = Path::new(&manifest_dir).join("assets");
    create_asset_directories(&assets_dir);
    create_placeholder_assets(&assets_dir);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/");

    link_sdl2_libraries();
}

fn create_asset_directories(assets_dir: &Path) {
    for subdir in ["fonts", "vehicles", "props"] {
        let dir_path = assets_dir.join(subdir);
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).unwrap();
        }
    }
}

fn create_placeholder_assets(assets_dir: &Path) {
    let placeholders = [
        ("vehicles/bluecar.png", b"PLACEHOLDER IMAGE" as &[u8]),
        ("vehicles/redcar.png", b"PLACEHOLDER IMAGE"),
        ("props/doll.png", b"PLACEHOLDER IMAGE"),
        ("fonts/font.ttf", b"PLACEHOLDER FONT"),
    ];

    for (relative, contents) in placeholders {
        let path = assets_dir.join(relative);
        if !path.exists() {
            println!("Creating placeholder {}...", relative);
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(contents).unwrap();
        }
    }
}

fn link_sdl2_libraries() {
    #[cfg(target_os = "macos")]
    {
        // Locate SDL2, SDL2_image and SDL2_ttf through Homebrew.
        for package in ["sdl2", "sdl2_image", "sdl2_ttf"] {
            match brew_prefix(package) {
                Ok(prefix) => {
                    println!("cargo:rustc-link-search={}/lib", prefix);
                }
                Err(_) => {
                    println!(
                        "{} not found via homebrew, install it with 'brew install {}'",
                        package, package
                    );
                }
            }
        }
        println!("cargo:rustc-link-lib=SDL2");
        println!("cargo:rustc-link-lib=SDL2_image");
        println!("cargo:rustc-link-lib=SDL2_ttf");
    }

    #[cfg(target_os = "linux")]
    {
        println!("On Linux, install SDL2 with your package manager,");
        println!("e.g.: sudo apt-get install libsdl2-dev libsdl2-image-dev libsdl2-ttf-dev");
    }

    #[cfg(target_os = "windows")]
    {
        println!("On Windows, make sure the SDL2 libraries are in your PATH.");
    }
}

#[cfg(target_os = "macos")]
fn brew_prefix(package: &str) -> Result<String, String> {
    match Command::new("brew").args(["--prefix", package]).output() {
        Ok(output) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(_) => Err(format!("package {} not found in homebrew", package)),
        Err(e) => Err(format!("failed to execute brew: {}", e)),
    }
}
