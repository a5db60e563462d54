//! Minimal inline pages for the account surface.
//!
//! Stand-ins for the storefront's real template layer, which renders these
//! views with full branding. The sign-in form digests the password
//! client-side with the same RFC 2307 scheme the server uses.

pub(crate) fn signin() -> &'static str {
    concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head><meta charset=\"utf-8\"><title>Sign in</title></head>\n",
        "<body>\n",
        "<h1>Sign in</h1>\n",
        "<form method=\"post\" action=\"/account/signin\">\n",
        "  <label>Username <input name=\"username\" maxlength=\"29\"></label>\n",
        "  <label>Password <input name=\"password\" type=\"password\" maxlength=\"49\"></label>\n",
        "  <button type=\"submit\">Sign in</button>\n",
        "</form>\n",
        "<form method=\"post\" action=\"/account/register\">\n",
        "  <label>Username <input name=\"username\" maxlength=\"29\"></label>\n",
        "  <label>Password <input name=\"password\" type=\"password\" maxlength=\"49\"></label>\n",
        "  <button type=\"submit\">Register</button>\n",
        "</form>\n",
        "</body>\n",
        "</html>\n",
    )
}

pub(crate) fn signout() -> &'static str {
    concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head><meta charset=\"utf-8\"><title>Signed out</title></head>\n",
        "<body>\n",
        "<h1>You have signed out</h1>\n",
        "<p><a href=\"/account\">Sign in again</a></p>\n",
        "</body>\n",
        "</html>\n",
    )
}

pub(crate) fn history() -> &'static str {
    concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head><meta charset=\"utf-8\"><title>Your account</title></head>\n",
        "<body>\n",
        "<h1>Your order history</h1>\n",
        "</body>\n",
        "</html>\n",
    )
}
