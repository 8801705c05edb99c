//! Czech translation table.

use super::{Common, Invite, Login, Translations};

pub const CS: Translations = Translations {
    common: Common {
        email: "E-mail",
        password: "Heslo",
        sign_in: "Přihlásit se",
    },
    login: Login {
        title: "Přihlášení do Homiq",
        subtitle: "Správa budov, jednotek a odečtů",
        error: "Přihlášení se nezdařilo",
    },
    invite: Invite {
        welcome: "Vítejte v Homiq",
        set_password_message: "Nastavte si heslo a dokončete aktivaci účtu",
        new_password: "Nové heslo",
        confirm_password: "Potvrzení hesla",
        activate_account: "Aktivovat účet",
        activating: "Aktivuji…",
        password_match_error: "Hesla se neshodují",
        password_length_error: "Heslo musí mít alespoň 8 znaků",
        failed_to_accept: "Pozvánku se nepodařilo přijmout",
        invalid_invite: "Tato pozvánka není platná nebo již vypršela",
    },
};
