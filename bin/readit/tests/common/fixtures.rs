use diesel::prelude::*;
use readit_primitives::models::entities::article::{Article, NewArticle};
use readit_primitives::models::entities::collection::{
    Collection, NewCollection, NewCollectionArticle,
};
use readit_primitives::models::entities::user::{NewUser, User};
use readit_primitives::schema::{articles, collection_articles, collections};
use uuid::Uuid;

pub fn create_user(conn: &mut PgConnection, label: &str) -> User {
    diesel::insert_into(readit_primitives::schema::users::table)
        .values(NewUser {
            email: &format!("{}_{}@example.com", label, Uuid::new_v4()),
            first_name: "Test",
            last_name: label,
        })
        .get_result::<User>(conn)
        .expect("Failed to insert test user")
}

pub fn create_article(conn: &mut PgConnection, author_id: i64, price: i64, is_free: bool) -> Article {
    let title = format!("Article {}", Uuid::new_v4());
    let slug = title.to_lowercase().replace(' ', "-");

    diesel::insert_into(articles::table)
        .values(NewArticle {
            author_id,
            title: &title,
            slug: &slug,
            summary: "A test article",
            is_free,
            price,
        })
        .get_result::<Article>(conn)
        .expect("Failed to insert test article")
}

pub fn create_collection(
    conn: &mut PgConnection,
    owner_id: i64,
    discount_percentage: i32,
    article_ids: &[i64],
) -> Collection {
    let collection = diesel::insert_into(collections::table)
        .values(NewCollection {
            owner_id,
            title: &format!("Collection {}", Uuid::new_v4()),
            discount_percentage,
        })
        .get_result::<Collection>(conn)
        .expect("Failed to insert test collection");

    let members: Vec<NewCollectionArticle> = article_ids
        .iter()
        .map(|article_id| NewCollectionArticle {
            collection_id: collection.id,
            article_id: *article_id,
        })
        .collect();

    diesel::insert_into(collection_articles::table)
        .values(&members)
        .execute(conn)
        .expect("Failed to insert collection members");

    collection
}
