fn main() {
    // `sqlx::migrate!` embeds the SQL at compile time
    println!("cargo:rerun-if-changed=migrations");
}
