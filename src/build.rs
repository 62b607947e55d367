// src/build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/phone_advisor.ico");
        res.compile().unwrap();
    }
}
