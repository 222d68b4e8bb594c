use cfg_aliases::cfg_aliases;

fn main() {
    // One alias per loader ecosystem; the platform modules are selected with
    // these rather than repeating the target_os conditions at every use site.
    cfg_aliases! {
        wgl: { target_os = "windows" },
        cgl: { target_os = "macos" },
        glx: { all(unix, not(target_os = "macos")) },
    }
}
