use quill_cms::domain::article::NewArticle;
use quill_cms::domain::category::{NewCategory, UpdateCategory};
use quill_cms::domain::comment::NewComment;
use quill_cms::domain::tag::NewTag;
use quill_cms::domain::user::{NewUser, UpdateProfile, UserRole};
use quill_cms::repository::DieselRepository;
use quill_cms::repository::{
    ArticleListQuery, ArticleReader, ArticleWriter, CategoryReader, CategoryWriter,
    CommentReader, CommentWriter, LikeReader, LikeWriter, TagReader, TagWriter, UserReader,
    UserWriter,
};

mod common;

fn seed_user(repo: &DieselRepository, email: &str) -> i32 {
    repo.create_user(&NewUser::new(
        email.into(),
        "not-a-real-hash".into(),
        UserRole::User,
        Some("Reader".into()),
    ))
    .unwrap()
    .id
}

fn seed_article(repo: &DieselRepository, title: &str, category_id: i32, tag_ids: Vec<i32>) -> i32 {
    let (article, _, _) = repo
        .create_article(&NewArticle::new(
            title.into(),
            "content".into(),
            Some("summary".into()),
            "Jane".into(),
            None,
            category_id,
            tag_ids,
        ))
        .unwrap();
    article.id
}

#[test]
fn test_category_repository_crud() {
    let test_db = common::TestDb::new("test_category_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let tech = repo
        .create_category(&NewCategory::new(
            "Technology".into(),
            "technology".into(),
            Some("software".into()),
        ))
        .unwrap();
    repo.create_category(&NewCategory::new("Life".into(), "life".into(), None))
        .unwrap();

    let listed = repo.list_categories().unwrap();
    assert_eq!(listed.len(), 2);
    // name-ascending
    assert_eq!(listed[0].0.name, "Life");
    assert_eq!(listed[1].0.name, "Technology");
    assert_eq!(listed[1].1, 0);

    let (by_slug, count) = repo.get_category_by_slug("technology").unwrap().unwrap();
    assert_eq!(by_slug.id, tech.id);
    assert_eq!(count, 0);

    let updated = repo
        .update_category(
            tech.id,
            &UpdateCategory::new("Tech".into(), "tech".into(), None),
        )
        .unwrap();
    assert_eq!(updated.name, "Tech");
    assert_eq!(updated.slug, "tech");
    assert!(repo.get_category_by_slug("technology").unwrap().is_none());

    repo.delete_category(tech.id).unwrap();
    assert!(repo.get_category_by_id(tech.id).unwrap().is_none());

    // Duplicate slugs are rejected by the unique index.
    repo.create_category(&NewCategory::new("A".into(), "life".into(), None))
        .unwrap_err();
}

#[test]
fn test_article_repository_crud_with_relations() {
    let test_db = common::TestDb::new("test_article_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let category = repo
        .create_category(&NewCategory::new("Tech".into(), "tech".into(), None))
        .unwrap();
    let other = repo
        .create_category(&NewCategory::new("Life".into(), "life".into(), None))
        .unwrap();
    let rust = repo
        .create_tag(&NewTag::new("Rust".into(), "rust".into()))
        .unwrap();
    let web = repo
        .create_tag(&NewTag::new("Web".into(), "web".into()))
        .unwrap();

    let article_id = seed_article(&repo, "First", category.id, vec![rust.id, web.id]);
    seed_article(&repo, "Second", other.id, vec![rust.id]);

    let (article, joined_category, tags) = repo.get_article_by_id(article_id).unwrap().unwrap();
    assert_eq!(article.title, "First");
    assert_eq!(joined_category.slug, "tech");
    assert_eq!(tags.len(), 2);

    let (total, all) = repo.list_articles(ArticleListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    let (tech_total, tech_articles) = repo
        .list_articles(ArticleListQuery::new().category(category.id))
        .unwrap();
    assert_eq!(tech_total, 1);
    assert_eq!(tech_articles[0].0.title, "First");

    let (rust_total, _) = repo
        .list_articles(ArticleListQuery::new().tag(rust.id))
        .unwrap();
    assert_eq!(rust_total, 2);

    let (web_total, web_articles) = repo
        .list_articles(ArticleListQuery::new().tag(web.id))
        .unwrap();
    assert_eq!(web_total, 1);
    assert_eq!(web_articles[0].0.id, article_id);

    let (paged_total, paged) = repo
        .list_articles(ArticleListQuery::new().paginate(1, 1))
        .unwrap();
    assert_eq!(paged_total, 2);
    assert_eq!(paged.len(), 1);

    // Tag counts reflect the join table.
    let (_, rust_count) = repo.get_tag_by_slug("rust").unwrap().unwrap();
    assert_eq!(rust_count, 2);

    let updates = quill_cms::domain::article::UpdateArticle::new(
        "First, revised".into(),
        "content".into(),
        None,
        "Jane".into(),
        None,
        category.id,
        vec![web.id],
    );
    let (updated, _, updated_tags) = repo.update_article(article_id, &updates).unwrap();
    assert_eq!(updated.title, "First, revised");
    assert_eq!(updated_tags.len(), 1);
    assert_eq!(updated_tags[0].slug, "web");

    repo.delete_article(article_id).unwrap();
    assert!(repo.get_article_by_id(article_id).unwrap().is_none());
    let (_, rust_count_after) = repo.get_tag_by_slug("rust").unwrap().unwrap();
    assert_eq!(rust_count_after, 1);
}

#[test]
fn test_view_counter_increments() {
    let test_db = common::TestDb::new("test_view_counter_increments.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let category = repo
        .create_category(&NewCategory::new("Tech".into(), "tech".into(), None))
        .unwrap();
    let article_id = seed_article(&repo, "Viewed", category.id, vec![]);

    repo.increment_view_count(article_id).unwrap();
    repo.increment_view_count(article_id).unwrap();

    let (article, _, _) = repo.get_article_by_id(article_id).unwrap().unwrap();
    assert_eq!(article.view_count, 2);
}

#[test]
fn test_comment_counter_stays_in_step() {
    let test_db = common::TestDb::new("test_comment_counter.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let category = repo
        .create_category(&NewCategory::new("Tech".into(), "tech".into(), None))
        .unwrap();
    let article_id = seed_article(&repo, "Discussed", category.id, vec![]);
    let user_id = seed_user(&repo, "reader@example.com");

    let first = repo
        .create_comment(&NewComment::new("nice read".into(), user_id, article_id))
        .unwrap();
    repo.create_comment(&NewComment::new("agreed".into(), user_id, article_id))
        .unwrap();

    let (article, _, _) = repo.get_article_by_id(article_id).unwrap().unwrap();
    assert_eq!(article.comment_count, 2);

    let (total, comments) = repo.list_article_comments(article_id, None).unwrap();
    assert_eq!(total, 2);
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].1.email, "reader@example.com");

    repo.delete_comment(first.id).unwrap();
    let (article, _, _) = repo.get_article_by_id(article_id).unwrap().unwrap();
    assert_eq!(article.comment_count, 1);

    let (user_total, user_comments) = repo.list_user_comments(user_id, None).unwrap();
    assert_eq!(user_total, 1);
    assert_eq!(user_comments[0].1.title, "Discussed");
}

#[test]
fn test_like_toggle_round_trip() {
    let test_db = common::TestDb::new("test_like_toggle_round_trip.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let category = repo
        .create_category(&NewCategory::new("Tech".into(), "tech".into(), None))
        .unwrap();
    let article_id = seed_article(&repo, "Liked", category.id, vec![]);
    let user_id = seed_user(&repo, "reader@example.com");

    assert!(!repo.user_liked(user_id, article_id).unwrap());

    let toggled_on = repo.toggle_like(user_id, article_id).unwrap();
    assert!(toggled_on.liked);
    assert_eq!(toggled_on.like_count, 1);
    assert!(repo.user_liked(user_id, article_id).unwrap());
    assert_eq!(repo.like_count(article_id).unwrap(), 1);

    let (liked_total, liked) = repo.list_liked_articles(user_id, None).unwrap();
    assert_eq!(liked_total, 1);
    assert_eq!(liked[0].0.id, article_id);

    let toggled_off = repo.toggle_like(user_id, article_id).unwrap();
    assert!(!toggled_off.liked);
    assert_eq!(toggled_off.like_count, 0);
    assert_eq!(repo.like_count(article_id).unwrap(), 0);

    let (article, _, _) = repo.get_article_by_id(article_id).unwrap().unwrap();
    assert_eq!(article.like_count, 0);
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let user = repo
        .create_user(&NewUser::new(
            "Reader@Example.com".into(),
            "hash-one".into(),
            UserRole::User,
            None,
        ))
        .unwrap();
    assert_eq!(user.email, "reader@example.com");
    assert_eq!(user.role, UserRole::User);

    assert!(
        repo.get_user_by_email("reader@example.com")
            .unwrap()
            .is_some()
    );

    // Partial profile update keeps the untouched field.
    let updated = repo
        .update_user_profile(
            user.id,
            &UpdateProfile {
                nickname: Some("Avid Reader".into()),
                bio: None,
            },
        )
        .unwrap();
    assert_eq!(updated.nickname.as_deref(), Some("Avid Reader"));

    let updated = repo
        .update_user_profile(
            user.id,
            &UpdateProfile {
                nickname: None,
                bio: Some("hello".into()),
            },
        )
        .unwrap();
    assert_eq!(updated.nickname.as_deref(), Some("Avid Reader"));
    assert_eq!(updated.bio.as_deref(), Some("hello"));

    repo.set_user_password(user.id, "hash-two").unwrap();
    let reloaded = repo.get_user_by_id(user.id).unwrap().unwrap();
    assert_eq!(reloaded.password_hash, "hash-two");

    let with_avatar = repo
        .set_user_avatar(user.id, "/uploads/images/a.png")
        .unwrap();
    assert_eq!(with_avatar.avatar.as_deref(), Some("/uploads/images/a.png"));

    // Email uniqueness is enforced.
    repo.create_user(&NewUser::new(
        "reader@example.com".into(),
        "hash".into(),
        UserRole::User,
        None,
    ))
    .unwrap_err();
}
