#[actix_web::main]
async fn main() -> std::io::Result<()> {
    passport_compliance_server::run().await
}
