fn main() {
    #[cfg(feature = "docs")]
    if rustc_version::version_meta()
        .map(|meta| meta.channel == rustc_version::Channel::Nightly)
        .unwrap_or_default()
    {
        println!("cargo:rustc-cfg=CHANNEL_NIGHTLY");
    }
}
