use caltrack::{
    config::Config,
    models::User,
    remote::RemoteClient,
    store::{LoadingState, Store},
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let remote = RemoteClient::new(&config.backend_url).expect("Backend URL misconfigured!");
    let store = Store::new(remote);

    match store.fetch_users().await {
        LoadingState::Loaded => {
            let users = store.users();
            if users.is_empty() {
                println!("No user data available");
            }
            for user in &users {
                print_progress(user);
            }
        }
        LoadingState::Error(message) => eprintln!("Error: {message}"),
        LoadingState::Loading => {}
    }
}

fn print_progress(user: &User) {
    println!("Welcome, {}", user.username);

    let total = user.total_calories();
    if total >= user.calorie_goal {
        println!("Congrats! You've hit your calorie goal for the day");
    } else {
        println!(
            "You need {} more calories to reach your goal",
            user.remaining_calories()
        );
    }
    println!("Calories: {total} / {}", user.calorie_goal);
    println!("Carbs:    {}g / {}g", user.total_carbs(), user.carbs_goal);
    println!("Fat:      {}g / {}g", user.total_fat(), user.fat_goal);
    println!(
        "Protein:  {}g / {}g",
        user.total_protein(),
        user.protein_goal
    );

    if user.meals.is_empty() {
        println!("No meals logged yet.");
        return;
    }

    println!("Meals logged:");
    for meal in &user.meals {
        println!(
            "  {} - Calories: {} Carbs: {}g Fat: {}g Protein: {}g",
            meal.name, meal.calories, meal.carbs, meal.fat, meal.protein
        );
    }
}
