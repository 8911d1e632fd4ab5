use kernel::id::Id;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorMarker;
pub type AuthorId = Id<AuthorMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_id_new() {
        let author_id = AuthorId::new();
        let uuid = author_id.as_uuid();
        assert_eq!(uuid.get_version_num(), 4); // UUIDv4
    }

    #[test]
    fn test_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let author_id = AuthorId::from_uuid(uuid);
        assert_eq!(author_id.as_uuid(), &uuid);
    }
}
