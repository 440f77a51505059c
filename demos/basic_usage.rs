use std::time::Duration;

use dootask_api::api::{DialogApi, MessageApi, ProjectApi, SystemApi, UserApi};
use dootask_api::models::message::SendMessageRequest;
use dootask_api::{Client, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create client configuration
    let config = ClientConfig::new(std::env::var("DOOTASK_TOKEN")?)
        .with_server("http://localhost:2222")
        .with_timeout(Duration::from_secs(30));

    let client = Client::new(config);

    // Verify the token
    println!("Fetching user info...");
    let user = client.get_user_info(false).await?;
    println!("Logged in as: {} (#{})", user.nickname, user.userid);
    println!("Identity tags: {:?}", user.identity);

    // Server metadata
    let version = client.get_version().await?;
    println!("\nServer version: {}", version.version);

    // List projects
    println!("\nListing projects...");
    let page = client.get_project_list(None).await?;
    println!("{} project(s), page {}:", page.total, page.current_page);
    for project in &page.data {
        println!(
            "  #{} {} ({} tasks, {}% done)",
            project.id, project.name, project.task_num, project.task_percent
        );
    }

    // List dialogs and greet the first group
    println!("\nListing dialogs...");
    let dialogs = client.get_dialog_list(None).await?;
    if let Some(dialog) = dialogs.data.first() {
        println!("Sending a greeting into '{}'...", dialog.name);
        client
            .send_message(SendMessageRequest {
                dialog_id: dialog.id,
                text: "**Hello from Rust!**".to_string(),
                ..Default::default()
            })
            .await?;
        println!("Sent.");
    }

    Ok(())
}
