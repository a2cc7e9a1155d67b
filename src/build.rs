// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/xc_dash.ico");
        res.set("ProductName", "XC Dashboard");
        res.compile().unwrap();
    }
}
