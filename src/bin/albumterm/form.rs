//! Add/edit form buffers and the checks run before calling into the synchronizer.

use albumterm::Album;

pub(crate) const FILL_BOTH_FIELDS: &str = "Please fill in both User ID and Title.";
pub(crate) const POSITIVE_USER_ID: &str = "Please enter a valid positive number for User ID.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum FormField {
    #[default]
    UserId,
    Title,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AlbumForm {
    user_id: String,
    title: String,
    focus: FormField,
}

impl AlbumForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Edit form starting from the album's current values.
    pub(crate) fn prefilled(album: &Album) -> Self {
        Self {
            user_id: album.user_id.to_string(),
            title: album.title.clone(),
            focus: FormField::Title,
        }
    }

    pub(crate) fn focus(&self) -> FormField {
        self.focus
    }

    pub(crate) fn value(&self, field: FormField) -> &str {
        match field {
            FormField::UserId => &self.user_id,
            FormField::Title => &self.title,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.focused_mut().push(ch);
    }

    pub(crate) fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::UserId => FormField::Title,
            FormField::Title => FormField::UserId,
        };
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::UserId => &mut self.user_id,
            FormField::Title => &mut self.title,
        }
    }
}

fn parse_positive(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(POSITIVE_USER_ID),
    }
}

/// `(owner_id, title)` for a new album. Both fields are required.
pub(crate) fn parse_new_album(form: &AlbumForm) -> Result<(i64, String), &'static str> {
    if form.user_id.trim().is_empty() || form.title.trim().is_empty() {
        return Err(FILL_BOTH_FIELDS);
    }
    let owner_id = parse_positive(&form.user_id)?;
    Ok((owner_id, form.title.clone()))
}

/// `(title, owner_id)` for an update. Blank fields keep the current values.
pub(crate) fn parse_album_update(
    form: &AlbumForm,
    current: &Album,
) -> Result<(String, i64), &'static str> {
    let title = match form.title.trim() {
        "" => current.title.clone(),
        trimmed => trimmed.to_string(),
    };
    let owner_id = if form.user_id.trim().is_empty() {
        i64::try_from(current.user_id).map_err(|_| POSITIVE_USER_ID)?
    } else {
        parse_positive(&form.user_id)?
    };
    if owner_id <= 0 {
        return Err(POSITIVE_USER_ID);
    }
    Ok((title, owner_id))
}
