#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Assicurati che res/guialocal.ico esista
    let mut res = WindowsResource::new();
    res.set_icon("res/guialocal.ico")
        .set("FileDescription", "guialocal CLI")
        .set("ProductName", "guialocal")
        .set("OriginalFilename", "guialocal.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed icon resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
