//! Integration tests for the repository layer against a real database:
//! - User, album and song CRUD
//! - Unique constraint violations
//! - Album deletion detaching its songs
//! - Partial updates leaving untouched columns alone
//! - Ownership records

use sqlx::PgPool;
use soundvault_db::models::album::{CreateAlbum, UpdateAlbum};
use soundvault_db::models::ownership::CreateSongOwnership;
use soundvault_db::models::song::{CreateSong, UpdateSong};
use soundvault_db::models::user::{CreateUser, UpdateUser};
use soundvault_db::repositories::{AlbumRepo, SongOwnershipRepo, SongRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: format!("{username}@test.com"),
        gender_id: 1,
        password_hash: "not-a-real-hash".to_string(),
    }
}

fn new_album(title: &str) -> CreateAlbum {
    CreateAlbum {
        title: title.to_string(),
        description: "An album".to_string(),
        genre_id: 1,
    }
}

fn new_song(title: &str, album_id: Option<i64>) -> CreateSong {
    CreateSong {
        title: title.to_string(),
        description: "A song".to_string(),
        genre_id: 2,
        album_id,
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_defaults_to_non_admin(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    assert_eq!(user.username, "alice");
    assert!(!user.is_admin);
    assert!(user.wallet.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup")).await.unwrap();

    let mut second = new_user("dup");
    second.email = "other@test.com".to_string();
    let err = UserRepo::create(&pool, &second).await.unwrap_err();

    assert!(is_unique_violation(&err));
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("first")).await.unwrap();

    let mut second = new_user("second");
    second.email = "first@test.com".to_string();
    let err = UserRepo::create(&pool, &second).await.unwrap_err();

    assert!(is_unique_violation(&err));
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_partial_update(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("patchme")).await.unwrap();

    let update = UpdateUser {
        wallet: Some("0xwallet".to_string()),
        ..Default::default()
    };
    let updated = UserRepo::update(&pool, user.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.wallet.as_deref(), Some("0xwallet"));
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);
    assert!(!updated.is_admin);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("gone")).await.unwrap();

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());
    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
    assert!(!UserRepo::delete(&pool, user.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Albums and songs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_album_title_rejected(pool: PgPool) {
    AlbumRepo::create(&pool, &new_album("Same")).await.unwrap();
    let err = AlbumRepo::create(&pool, &new_album("Same")).await.unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_album_detaches_songs(pool: PgPool) {
    let album = AlbumRepo::create(&pool, &new_album("Doomed")).await.unwrap();
    let other = AlbumRepo::create(&pool, &new_album("Kept")).await.unwrap();

    let s1 = SongRepo::create(&pool, &new_song("One", Some(album.id)))
        .await
        .unwrap();
    let s2 = SongRepo::create(&pool, &new_song("Two", Some(album.id)))
        .await
        .unwrap();
    let s3 = SongRepo::create(&pool, &new_song("Three", Some(other.id)))
        .await
        .unwrap();

    assert!(AlbumRepo::delete(&pool, album.id).await.unwrap());
    assert!(AlbumRepo::find_by_id(&pool, album.id).await.unwrap().is_none());

    for id in [s1.id, s2.id] {
        let song = SongRepo::find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(song.album_id, None, "song {id} must survive with no album");
    }

    let untouched = SongRepo::find_by_id(&pool, s3.id).await.unwrap().unwrap();
    assert_eq!(untouched.album_id, Some(other.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_album_returns_false(pool: PgPool) {
    assert!(!AlbumRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_song_title_only_update(pool: PgPool) {
    let song = SongRepo::create(&pool, &new_song("Old Title", None))
        .await
        .unwrap();

    let update = UpdateSong {
        title: Some("New Title".to_string()),
        ..Default::default()
    };
    let updated = SongRepo::update(&pool, song.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.description, song.description);
    assert_eq!(updated.genre_id, song.genre_id);
    assert_eq!(updated.album_id, song.album_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_album_partial_update(pool: PgPool) {
    let album = AlbumRepo::create(&pool, &new_album("Before")).await.unwrap();

    let update = UpdateAlbum {
        description: Some("Rewritten".to_string()),
        ..Default::default()
    };
    let updated = AlbumRepo::update(&pool, album.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Before");
    assert_eq!(updated.description, "Rewritten");
    assert_eq!(updated.genre_id, album.genre_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_album(pool: PgPool) {
    let album = AlbumRepo::create(&pool, &new_album("Listed")).await.unwrap();
    SongRepo::create(&pool, &new_song("In", Some(album.id)))
        .await
        .unwrap();
    SongRepo::create(&pool, &new_song("Out", None)).await.unwrap();

    let songs = SongRepo::list_by_album(&pool, album.id).await.unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].title, "In");
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ownership_is_unique_per_user_and_song(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("owner")).await.unwrap();
    let song = SongRepo::create(&pool, &new_song("Owned", None))
        .await
        .unwrap();
    let input = CreateSongOwnership {
        user_id: user.id,
        song_id: song.id,
    };

    let record = SongOwnershipRepo::create(&pool, &input).await.unwrap();
    assert_eq!(record.user_id, user.id);
    assert_eq!(record.song_id, song.id);

    let err = SongOwnershipRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_unique_violation(&err));

    let owned = SongOwnershipRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(owned.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_song_removes_ownership(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("collector")).await.unwrap();
    let song = SongRepo::create(&pool, &new_song("Ephemeral", None))
        .await
        .unwrap();
    SongOwnershipRepo::create(
        &pool,
        &CreateSongOwnership {
            user_id: user.id,
            song_id: song.id,
        },
    )
    .await
    .unwrap();

    assert!(SongRepo::delete(&pool, song.id).await.unwrap());
    assert!(SongOwnershipRepo::find(&pool, user.id, song.id)
        .await
        .unwrap()
        .is_none());
}
